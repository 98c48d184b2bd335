//! Supplemental curation batch — entries researched after the baseline
//! pass: browsers, generative-AI assistants, developer tooling, and a few
//! stragglers from the referential.

use classif_core::CertificationLevel::{Authorized, Prohibited, Restricted};
use classif_core::Classification;

use crate::entry;

/// All supplemental entries, grouped as researched.
pub fn supplemental() -> Vec<Classification> {
    vec![
        // Browsers
        entry(
            "Apple Safari",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Apple Inc. (USA), non certifié DPF, bonnes protections vie privée",
            "Niveau 2 : Apple Inc. (USA), non certifié DPF mais bonnes protections vie privée intégrées (ITP)",
        ),
        entry(
            "Brave",
            Authorized,
            "Local/États-Unis",
            false,
            "Usage autorisé - Navigateur axé vie privée, pas de stockage historique",
            "Niveau 1 : Brave Software Inc. (USA), conforme RGPD, bloque trackers par défaut, pas de stockage historique",
        ),
        entry(
            "Google Chrome",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Google (USA), certifié DPF, collecte télémétrie",
            "Niveau 2 : Google LLC (USA), certifié EU-US DPF, collecte télémétrie significative",
        ),
        entry(
            "Mozilla Firefox",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Mozilla (USA), non certifié DPF, télémétrie configurable",
            "Niveau 2 : Mozilla Corporation (USA), non certifié DPF, protection tracking par défaut mais télémétrie",
        ),
        entry(
            "Microsoft Edge",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Microsoft (USA), certifié DPF, télémétrie importante",
            "Niveau 2 : Microsoft (USA), certifié EU-US DPF, télémétrie importante (48 connexions)",
        ),
        // Generative-AI assistants
        entry(
            "ChatGPT",
            Restricted,
            "États-Unis (option UE Enterprise)",
            true,
            "Usage avec précautions - OpenAI (USA), certifié DPF, option résidence UE (Enterprise)",
            "Niveau 2 : OpenAI (USA), certifié DPF, résidence données UE disponible pour Enterprise/API depuis fév 2025",
        ),
        entry(
            "Claude",
            Restricted,
            "États-Unis/Global",
            true,
            "Usage avec précautions - Anthropic (USA), SOC 2/ISO 27001, Cloud Act applicable",
            "Niveau 2 : Anthropic (USA), certifications SOC 2/ISO 27001/ISO 42001, traitement US/UE/Asie",
        ),
        entry(
            "Gemini",
            Restricted,
            "États-Unis (centres UE disponibles)",
            true,
            "Usage avec précautions - Google (USA), certifié DPF, centres données UE",
            "Niveau 2 : Google (USA), certifié EU-US DPF, conforme RGPD/HIPAA pour Workspace",
        ),
        entry(
            "Microsoft Copilot",
            Restricted,
            "États-Unis (option UE/CH)",
            true,
            "Usage avec précautions - Microsoft (USA), certifié DPF, traitement CH prévu 2026",
            "Niveau 2 : Microsoft (USA), certifié DPF, traitement in-country CH annoncé pour 2026",
        ),
        entry(
            "Mistral Le Chat",
            Authorized,
            "France/Union Européenne",
            true,
            "Usage autorisé - Mistral AI (France), hébergement UE, conforme RGPD",
            "Niveau 1 : Mistral AI (Paris, France), entreprise UE, hébergement UE, souveraineté données européenne",
        ),
        entry(
            "Perplexity",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Perplexity AI (USA), conforme DPF, SOC 2",
            "Niveau 2 : Perplexity AI (USA), conforme EU-US DPF, SOC 2, trackers tiers",
        ),
        // Developer tooling
        entry(
            "Cursor",
            Restricted,
            "États-Unis (SCCs UE)",
            true,
            "Usage avec précautions - Anysphere (USA), SOC 2, Privacy Mode disponible",
            "Niveau 2 : Anysphere Inc. (USA), SOC 2 certifié, Privacy Mode avec rétention zéro disponible",
        ),
        entry(
            "PhpStorm",
            Authorized,
            "Union Européenne",
            true,
            "Usage autorisé - JetBrains (Tchéquie), hébergement UE, conforme RGPD",
            "Niveau 1 : JetBrains s.r.o. (Tchéquie, UE), données traitées en UE, télémétrie opt-in",
        ),
        entry(
            "WebStorm",
            Authorized,
            "Union Européenne",
            true,
            "Usage autorisé - JetBrains (Tchéquie), hébergement UE, conforme RGPD",
            "Niveau 1 : JetBrains s.r.o. (Tchéquie, UE), données traitées en UE, télémétrie opt-in",
        ),
        entry(
            "Sublime Text",
            Restricted,
            "Australie/États-Unis",
            true,
            "Usage avec précautions - Sublime HQ (Australie), sync cloud optionnel US",
            "Niveau 2 : Sublime HQ (Australie), sync cloud optionnel (US), peut être utilisé hors-ligne",
        ),
        entry(
            "Zed",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Zed Industries (USA), télémétrie opt-in, mode hors-ligne",
            "Niveau 2 : Zed Industries Inc. (USA), télémétrie opt-in, rétention zéro pour IA, mode hors-ligne possible",
        ),
        entry(
            "Bruno",
            Authorized,
            "Local",
            false,
            "Usage autorisé - Open source, aucun cloud, données locales uniquement",
            "Niveau 1 : open source, application locale sans cloud ni télémétrie, collections API stockées localement",
        ),
        entry(
            "Ghostty",
            Authorized,
            "Local",
            false,
            "Usage autorisé - Open source, terminal local, aucune collecte données",
            "Niveau 1 : open source (Hack Club), terminal local sans télémétrie ni fonctionnalités cloud",
        ),
        // Remaining applications
        entry(
            "Notion",
            Restricted,
            "États-Unis (UE Enterprise)",
            true,
            "Usage avec précautions - Notion Labs (USA), résidence UE uniquement Enterprise",
            "Niveau 2 : Notion Labs (USA), hébergement AWS US par défaut, résidence UE uniquement pour Enterprise",
        ),
        entry(
            "Todoist",
            Authorized,
            "Union Européenne/Global",
            true,
            "Usage autorisé - Doist (USA), conforme RGPD, SOC 2, hébergement UE disponible",
            "Niveau 1 : Doist (USA), conforme RGPD, SOC 2 certifié, Google Cloud avec options UE, pas de tracking invasif",
        ),
        entry(
            "MongoDB Atlas",
            Authorized,
            "Union Européenne (configurable)",
            true,
            "Usage autorisé - MongoDB Inc. (USA), résidence données UE configurable",
            "Niveau 1 : MongoDB Inc. (USA), permet sélection région UE (Frankfurt, Ireland), DPA disponible, conforme RGPD",
        ),
        Classification {
            to_validate: true,
            ..entry(
                "Antigravity",
                Restricted,
                "États-Unis",
                true,
                "Usage avec précautions - Google (USA), plateforme IA, cadre RGPD Google",
                "Niveau 2 : Google (USA), plateforme dev IA (Gemini 3), infrastructure Google Cloud, cadre RGPD Google",
            )
        },
        entry(
            "Gravity Designer",
            Prohibited,
            "Canada/Chine",
            true,
            "INTERDIT - Corel (Canada), transferts données vers Chine mentionnés",
            "Niveau 3 : Corel (Canada/Cascade Parent Ltd), politique confidentialité mentionne transferts vers Chine",
        ),
        entry(
            "Dia",
            Authorized,
            "Local",
            false,
            "Usage autorisé - Open source GNOME, application locale, aucune collecte",
            "Niveau 1 : open source (GPL-2.0, projet GNOME), application locale, aucun cloud ni télémétrie",
        ),
    ]
}
