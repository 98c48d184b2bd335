//! Baseline curation batch — the primary classification pass over the
//! CEJEF software referential.
//!
//! Sources per entry: vendor seat and legal entity, hosting location,
//! EU-US Data Privacy Framework certification status, and any documented
//! regulatory history (fines, COPPA/FERPA status, DPA availability).

use classif_core::CertificationLevel::{Authorized, Prohibited, Restricted};
use classif_core::Classification;

use crate::entry;

/// All baseline entries, in curation order, the institutional Microsoft
/// block last.
pub fn baseline() -> Vec<Classification> {
    let mut entries = curated();
    entries.extend(microsoft_dpa_block());
    entries
}

fn curated() -> Vec<Classification> {
    vec![
        entry(
            "ADOBE ACROBAT",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Adobe Inc. (USA), certifié EU-US DPF",
            "Niveau 2 : Adobe Inc. (USA), certifié EU-US DPF, hébergement US, Cloud Act applicable",
        ),
        entry(
            "ATLASSIAN (JIRA, CONFLUENCE, TRELLO)",
            Restricted,
            "États-Unis/Australie",
            true,
            "Usage avec précautions - Atlassian (Australie), certifié DPF",
            "Niveau 2 : Atlassian (Australie), certifié EU-US DPF, options hébergement UE disponibles",
        ),
        Classification {
            to_validate: true,
            ..entry(
                "AZENDOO (app)",
                Prohibited,
                "Inconnu",
                true,
                "INTERDIT - Service discontinué, politique confidentialité insuffisante",
                "Niveau 3 : service apparemment discontinué, aucune politique RGPD claire",
            )
        },
        entry(
            "BABBEL",
            Restricted,
            "Union Européenne (AWS)",
            true,
            "Usage avec précautions - Entreprise allemande, hébergement AWS (Cloud Act)",
            "Niveau 2 : Lesson Nine GmbH (Berlin), conforme RGPD, utilise AWS en UE (soumis au Cloud Act US)",
        ),
        entry(
            "BDnF (Application)",
            Authorized,
            "France",
            false,
            "Usage autorisé - Service public français, hébergement France",
            "Niveau 1 : Bibliothèque nationale de France, institution publique, hébergement France",
        ),
        entry(
            "BLINKLEARNING",
            Authorized,
            "Union Européenne",
            true,
            "Usage autorisé - Entreprise espagnole (Madrid), hébergement UE",
            "Niveau 1 : siège à Madrid (Espagne), données hébergées en UE, conforme RGPD",
        ),
        entry(
            "BLUEMAIL",
            Prohibited,
            "États-Unis",
            true,
            "INTERDIT - Collecte extensive de données emails, politique confidentialité problématique",
            "Niveau 3 : Blix Inc. (USA), historique controverses collecte données, non certifié DPF",
        ),
        entry(
            "BOOK CREATOR",
            Restricted,
            "Royaume-Uni/États-Unis",
            true,
            "Usage avec précautions - Entreprise UK, hébergement Google Cloud",
            "Niveau 2 : Red Jumper Ltd (UK), conforme RGPD UK, utilise Google Cloud, certifié COPPA",
        ),
        entry(
            "BOOKILI",
            Authorized,
            "France",
            true,
            "Usage autorisé - Éditeur français (Bayard/Milan), hébergement France",
            "Niveau 1 : Bayard/Milan Presse (France), données hébergées en France, conforme RGPD",
        ),
        entry(
            "CALENDLY",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Entreprise US, certifié DPF",
            "Niveau 2 : Calendly LLC (USA), certifié EU-US DPF, SOC 2 Type II, DPA disponible",
        ),
        entry(
            "CALENGOO",
            Authorized,
            "Allemagne",
            true,
            "Usage autorisé - App allemande, synchronise avec calendriers existants",
            "Niveau 1 : développeur allemand, app locale sans stockage propre de données",
        ),
        entry(
            "CANVA",
            Restricted,
            "Australie/États-Unis",
            true,
            "Usage avec précautions - Entreprise australienne, certifiée DPF",
            "Niveau 2 : Canva Pty Ltd (Australie), certifié DPF, SOC 2, Canva for Education conforme COPPA/FERPA",
        ),
        entry(
            "CAPCUT",
            Prohibited,
            "Chine",
            true,
            "INTERDIT - ByteDance (Chine), amende RGPD 530M€, transfert données vers Chine",
            "Niveau 3 : propriété de ByteDance (Chine), condamné pour violations RGPD massives",
        ),
        entry(
            "CARD2BRAIN",
            Authorized,
            "Suisse",
            true,
            "Usage autorisé - Entreprise suisse, hébergement Suisse",
            "Niveau 1 : entreprise suisse (Zurich), données hébergées en Suisse, conforme LPD/RGPD",
        ),
        entry(
            "CLARO SPEAK PLUS iOS et CLARO PDF PRO iOS",
            Authorized,
            "Royaume-Uni",
            false,
            "Usage autorisé - Claro Software (UK), apps accessibilité",
            "Niveau 1 : Claro Software (UK), applications accessibilité, pas de stockage données",
        ),
        entry(
            "CLASSCRAFT",
            Prohibited,
            "États-Unis",
            true,
            "INTERDIT - Collecte données comportementales extensive, acquis par HMH",
            "Niveau 3 : Classcraft (Canada) acquis par HMH (USA), collecte données comportementales extensive",
        ),
        entry(
            "CLASSROOMSCREEN",
            Restricted,
            "Union Européenne",
            true,
            "Usage avec précautions - Entreprise NL, utilise services tiers US",
            "Niveau 2 : Classroomscreen BV (Pays-Bas), hébergement UE mais services tiers US",
        ),
        entry(
            "CLASSTIME",
            Authorized,
            "Suisse",
            true,
            "Usage autorisé - Entreprise suisse, hébergement Suisse/UE",
            "Niveau 1 : Classtime AG (Zurich), hébergement Suisse/UE, conforme RGPD",
        ),
        entry(
            "CODE.ORG",
            Authorized,
            "États-Unis",
            true,
            "Usage autorisé - Organisation non-profit, engagement fort vie privée enfants",
            "Niveau 1 : Code.org (USA), organisation à but non lucratif, certifié COPPA/FERPA, engagement vie privée",
        ),
        entry(
            "DICTALY",
            Restricted,
            "France",
            true,
            "Usage avec précautions - Entreprise française, analytics tiers",
            "Niveau 2 : entreprise française, hébergement France, mais analytics tiers",
        ),
        entry(
            "DOODLE",
            Restricted,
            "Suisse",
            true,
            "Usage avec précautions - Entreprise suisse, sous-traitants US",
            "Niveau 2 : TX Group (Suisse), hébergement CH, mais sous-traitants US",
        ),
        entry(
            "DRIVE INFOMANIAK",
            Authorized,
            "Suisse",
            true,
            "Usage autorisé - Infomaniak (Genève), hébergement exclusivement Suisse",
            "Niveau 1 : Infomaniak (Genève), hébergement exclusivement Suisse, conforme LPD/RGPD",
        ),
        entry(
            "DRUIDE, ANTIDOTE",
            Authorized,
            "Canada",
            true,
            "Usage autorisé - Druide informatique (Québec), hébergement Canada",
            "Niveau 1 : Druide informatique (Québec), Canada pays adéquat UE, conforme RGPD",
        ),
        entry(
            "DUOLINGO",
            Prohibited,
            "États-Unis",
            true,
            "INTERDIT - Collecte extensive, publicités ciblées, données mineurs",
            "Niveau 3 : Duolingo Inc. (USA), collecte extensive, publicités ciblées version gratuite",
        ),
        entry(
            "DYNAMILIS",
            Authorized,
            "France",
            true,
            "Usage autorisé - Entreprise française, hébergement France",
            "Niveau 1 : entreprise française, hébergement France, conforme RGPD",
        ),
        entry(
            "ED.AI",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Entreprise US EdTech, certifié DPF",
            "Niveau 2 : entreprise US EdTech, certifié EU-US DPF",
        ),
        entry(
            "EDPUZZLE",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Entreprise US, certifiée DPF, COPPA/FERPA",
            "Niveau 2 : Edpuzzle Inc. (USA), certifié EU-US DPF, conforme COPPA/FERPA",
        ),
        entry(
            "EDUBASE READER",
            Prohibited,
            "Hongrie",
            true,
            "INTERDIT - Politique confidentialité insuffisante",
            "Niveau 3 : entreprise hongroise, politique confidentialité insuffisante",
        ),
        entry(
            "EDUCAPLAY",
            Restricted,
            "Union Européenne",
            true,
            "Usage avec précautions - Entreprise espagnole, analytics tiers",
            "Niveau 2 : ADR Formación (Espagne), hébergement UE, analytics tiers",
        ),
        entry(
            "EXAM.NET",
            Restricted,
            "Union Européenne",
            true,
            "Usage avec précautions - Entreprise suédoise, hébergement UE",
            "Niveau 2 : Exam.net AB (Suède), hébergement UE, conforme RGPD, quelques services tiers",
        ),
        entry(
            "FIZZIQ",
            Authorized,
            "France",
            false,
            "Usage autorisé - Trapèze Digital (France), hébergement UE",
            "Niveau 1 : Trapèze Digital (France), hébergement UE, pas de compte requis",
        ),
        entry(
            "FLORA INCOGNITA (app)",
            Authorized,
            "Allemagne",
            false,
            "Usage autorisé - Projet de recherche allemand (TU Ilmenau)",
            "Niveau 1 : TU Ilmenau (Allemagne), projet de recherche public, pas de compte requis",
        ),
        entry(
            "FOXIT READER",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Entreprise US, certifiée DPF",
            "Niveau 2 : Foxit Software (USA), certifié EU-US DPF",
        ),
        entry(
            "FRAMASOFT",
            Authorized,
            "France",
            true,
            "Usage autorisé - Association française, hébergement France",
            "Niveau 1 : Framasoft, association française CHATONS, hébergement France, open source",
        ),
        entry(
            "GARMIN CONNECT",
            Prohibited,
            "États-Unis",
            true,
            "INTERDIT - Données santé sensibles, transferts pays tiers",
            "Niveau 3 : Garmin Ltd (USA), données santé sensibles, transferts vers pays tiers",
        ),
        entry(
            "GENIALLY",
            Restricted,
            "Union Européenne",
            true,
            "Usage avec précautions - Entreprise espagnole, utilise AWS",
            "Niveau 2 : Genially Web SL (Espagne), hébergement UE, utilise AWS",
        ),
        entry(
            "GEOGEBRA",
            Authorized,
            "Union Européenne",
            true,
            "Usage autorisé - Entreprise autrichienne (Linz), hébergement UE",
            "Niveau 1 : GeoGebra GmbH (Linz, Autriche), hébergement UE, conforme RGPD",
        ),
        entry(
            "GIMKIT",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Entreprise US, COPPA/FERPA compliant",
            "Niveau 2 : Gimkit Inc. (USA), conforme COPPA/FERPA",
        ),
        entry(
            "GLOSE",
            Prohibited,
            "États-Unis",
            true,
            "INTERDIT - Politique privacy incertaine après acquisition",
            "Niveau 3 : Glose Education (France acquis USA), politique privacy incertaine",
        ),
        entry(
            "JSTOR",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Organisation non-profit US, DPF",
            "Niveau 2 : ITHAKA (USA), organisation à but non lucratif, certifié DPF",
        ),
        Classification {
            to_validate: true,
            ..entry(
                "JUNGLEAI",
                Prohibited,
                "Inconnu",
                true,
                "INTERDIT - Startup IA, politique confidentialité insuffisante",
                "Niveau 3 : startup IA, politique confidentialité insuffisante",
            )
        },
        entry(
            "KAHOOT",
            Restricted,
            "Union Européenne/États-Unis",
            true,
            "Usage avec précautions - Entreprise norvégienne, hébergement AWS multi-région",
            "Niveau 2 : Kahoot ASA (Norvège), hébergement AWS multi-région, certifié COPPA",
        ),
        entry(
            "KIALO EDU",
            Authorized,
            "Allemagne",
            true,
            "Usage autorisé - Entreprise allemande (Berlin), hébergement UE",
            "Niveau 1 : Kialo GmbH (Berlin), hébergement UE, DPA disponible, conforme RGPD",
        ),
        entry(
            "KNOWT",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Startup EdTech US",
            "Niveau 2 : Knowt Inc. (USA), startup EdTech, politique privacy standard",
        ),
        entry(
            "LEARNINGAPPS",
            Restricted,
            "Suisse",
            true,
            "Usage avec précautions - PH Bern (Suisse), widgets tiers",
            "Niveau 2 : PH Bern (Suisse), hébergement Suisse, mais intègre widgets tiers",
        ),
        entry(
            "LEARNINGVIEW.ORG",
            Authorized,
            "Suisse",
            true,
            "Usage autorisé - PH Schwyz (Suisse), hébergement Suisse",
            "Niveau 1 : PH Schwyz (Suisse), hébergement Suisse, conforme LPD",
        ),
        entry(
            "LINGODEER",
            Prohibited,
            "Chine",
            true,
            "INTERDIT - Entreprise chinoise, transfert données vers Chine",
            "Niveau 3 : entreprise chinoise, transfert données vers pays non adéquat",
        ),
        entry(
            "LINKEDIN",
            Prohibited,
            "États-Unis",
            true,
            "INTERDIT - Collecte extensive, profils professionnels mineurs déconseillés",
            "Niveau 3 : Microsoft/LinkedIn (USA), collecte extensive, non adapté aux mineurs",
        ),
        entry(
            "LOCKEE.FR",
            Restricted,
            "France",
            true,
            "Usage avec précautions - Développeur français, analytics tiers",
            "Niveau 2 : développeur français, hébergement UE, analytics tiers",
        ),
        entry(
            "LUCID",
            Prohibited,
            "États-Unis",
            true,
            "INTERDIT - Collecte analytics extensive, non certifié DPF",
            "Niveau 3 : Lucid Software (USA), collecte analytics extensive, non certifié DPF",
        ),
        entry(
            "LYRICSTRAINING",
            Restricted,
            "Union Européenne",
            true,
            "Usage avec précautions - Entreprise espagnole, publicités tiers",
            "Niveau 2 : entreprise espagnole, hébergement UE, publicités tiers",
        ),
        entry(
            "MAGICSCHOOL.AI",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - IA générative US, SOC 2 certifié",
            "Niveau 2 : MagicSchool AI (USA), IA générative, SOC 2, FERPA compliant",
        ),
        entry(
            "MEMRISE",
            Prohibited,
            "États-Unis",
            true,
            "INTERDIT - Publicités invasives, IA controversée",
            "Niveau 3 : Memrise Ltd (UK/USA), publicités invasives version gratuite",
        ),
        entry(
            "MINDMEISTER",
            Restricted,
            "Union Européenne",
            true,
            "Usage avec précautions - Entreprise allemande, utilise AWS UE",
            "Niveau 2 : MeisterLabs (Munich), utilise AWS UE, conforme RGPD",
        ),
        entry(
            "MINE",
            Prohibited,
            "Israël",
            true,
            "INTERDIT - Pays non adéquat UE, service découverte données",
            "Niveau 3 : Mine PrivacyOps (Israël), pays non adéquat UE",
        ),
        entry(
            "MINECRAFT : EDUCATION EDITION",
            Restricted,
            "Union Européenne (option)",
            true,
            "Usage avec précautions - Microsoft, certifié DPF, hébergement UE disponible",
            "Niveau 2 : Microsoft (USA), certifié DPF, hébergement UE disponible, COPPA/FERPA",
        ),
        entry(
            "MIRO",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Entreprise US, certifiée DPF, SOC 2",
            "Niveau 2 : Miro Inc. (USA), certifié EU-US DPF, SOC 2, options UE",
        ),
        Classification {
            to_validate: true,
            ..entry(
                "MURAL",
                Prohibited,
                "États-Unis",
                true,
                "INTERDIT - Acquis par Microsoft, changements politique à venir",
                "Niveau 3 : Mural (USA), acquis par Microsoft, politique privacy en transition",
            )
        },
        entry(
            "NOTEBOOKLM",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Google (USA), certifié DPF",
            "Niveau 2 : Google (USA), certifié EU-US DPF, IA générative",
        ),
        entry(
            "ONE CALENDAR",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Développeur US, synchronisation calendriers",
            "Niveau 2 : développeur US, synchronisation avec services tiers",
        ),
        entry(
            "ORTHOHPHORE",
            Authorized,
            "France",
            true,
            "Usage autorisé - Académie de Lille, service public français",
            "Niveau 1 : Académie de Lille (France), service public, hébergement France",
        ),
        entry(
            "PADLET",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Entreprise US, certifiée DPF, COPPA",
            "Niveau 2 : Padlet Inc. (USA), certifié EU-US DPF, conforme COPPA",
        ),
        entry(
            "PCLOUD",
            Authorized,
            "Suisse/Luxembourg",
            true,
            "Usage autorisé - pCloud AG (Suisse), hébergement Suisse/Luxembourg",
            "Niveau 1 : pCloud AG (Suisse), option hébergement Luxembourg ou Suisse",
        ),
        entry(
            "PDF EXPERT",
            Authorized,
            "Union Européenne",
            true,
            "Usage autorisé - Readdle (Ukraine), hébergement UE",
            "Niveau 1 : Readdle (Ukraine/UE), hébergement UE, conforme RGPD",
        ),
        entry(
            "PHONOWRITER",
            Authorized,
            "Suisse",
            false,
            "Usage autorisé - Développeur suisse, app locale",
            "Niveau 1 : développeur suisse, application locale, pas de stockage cloud",
        ),
        entry(
            "PHOTOPEA",
            Restricted,
            "Union Européenne",
            true,
            "Usage avec précautions - Développeur tchèque, publicités Google",
            "Niveau 2 : Ivan Kutskir (Tchéquie), hébergement UE, publicités Google",
        ),
        entry(
            "PHYPHOX",
            Authorized,
            "Allemagne",
            false,
            "Usage autorisé - RWTH Aachen, université publique allemande",
            "Niveau 1 : RWTH Aachen (Allemagne), université publique, pas de compte requis",
        ),
        entry(
            "PIXTON",
            Restricted,
            "Canada",
            true,
            "Usage avec précautions - Entreprise canadienne, hébergement AWS",
            "Niveau 2 : Pixton Comics (Canada), hébergement AWS, COPPA compliant",
        ),
        entry(
            "PLANDECLASSE.CA",
            Restricted,
            "Canada",
            true,
            "Usage avec précautions - Développeur canadien",
            "Niveau 2 : développeur canadien, politique privacy basique",
        ),
        entry(
            "PLICKERS",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Entreprise US, certifiée DPF",
            "Niveau 2 : Plickers Inc. (USA), certifié EU-US DPF, COPPA",
        ),
        entry(
            "PREZI",
            Prohibited,
            "États-Unis",
            true,
            "INTERDIT - Collecte analytics extensive, non certifié DPF",
            "Niveau 3 : Prezi Inc. (USA), collecte analytics extensive, non certifié DPF",
        ),
        entry(
            "PROJET VOLTAIRE",
            Authorized,
            "France",
            true,
            "Usage autorisé - Woonoz SAS (France), hébergement France",
            "Niveau 1 : Woonoz SAS (France), hébergement France, conforme RGPD",
        ),
        entry(
            "QUIZLET",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Entreprise US, certifiée DPF, COPPA",
            "Niveau 2 : Quizlet Inc. (USA), certifié EU-US DPF, conforme COPPA",
        ),
        entry(
            "REMARKABLE INTEGRATION ONEDRIVE",
            Restricted,
            "Union Européenne/États-Unis",
            true,
            "Usage avec précautions - reMarkable (Norvège), intégration cloud",
            "Niveau 2 : reMarkable AS (Norvège), intégration OneDrive, hébergement multi-région",
        ),
        entry(
            "SAMSUNG EMAIL",
            Restricted,
            "Corée du Sud",
            true,
            "Usage avec précautions - Samsung (Corée du Sud), collecte analytics",
            "Niveau 2 : Samsung (Corée), pays adéquat UE, mais collecte analytics",
        ),
        entry(
            "SAMSUNG NOTES",
            Restricted,
            "Corée du Sud",
            true,
            "Usage avec précautions - Samsung (Corée du Sud), synchronisation cloud",
            "Niveau 2 : Samsung (Corée), pays adéquat UE, synchronisation cloud",
        ),
        entry(
            "SCHOLARVOX",
            Restricted,
            "France",
            true,
            "Usage avec précautions - Cyberlibris (France), hébergement France",
            "Niveau 2 : Cyberlibris (France), hébergement France, quelques trackers tiers",
        ),
        entry(
            "SCHOOL AI",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - IA générative US, FERPA compliant",
            "Niveau 2 : SchoolAI (USA), IA générative, conforme FERPA",
        ),
        entry(
            "SMART TECH : LUMIO",
            Restricted,
            "Canada/États-Unis",
            true,
            "Usage avec précautions - SMART Technologies (Canada), hébergement AWS",
            "Niveau 2 : SMART Technologies (Canada), hébergement AWS, DPA disponible",
        ),
        entry(
            "SODA PDF",
            Restricted,
            "Canada",
            true,
            "Usage avec précautions - Lulu Software (Canada), hébergement cloud",
            "Niveau 2 : Lulu Software (Canada), hébergement cloud, politique privacy standard",
        ),
        entry(
            "SOUNDTRAP EDUCATION",
            Prohibited,
            "États-Unis",
            true,
            "INTERDIT - Spotify/Soundtrap, hébergement US, collecte audio",
            "Niveau 3 : Spotify/Soundtrap (Suède), hébergement US, collecte données audio",
        ),
        entry(
            "SPARK",
            Prohibited,
            "Ukraine",
            true,
            "INTERDIT - Client email, accès contenu côté serveur",
            "Niveau 3 : Readdle/Spark (Ukraine), accès contenu emails côté serveur",
        ),
        entry(
            "SUNO.AI",
            Prohibited,
            "États-Unis",
            true,
            "INTERDIT - IA générative, droits auteur incertains, politique privacy floue",
            "Niveau 3 : Suno AI (USA), IA générative musicale, droits auteur incertains",
        ),
        entry(
            "TAPTOUCHE",
            Authorized,
            "Canada",
            true,
            "Usage autorisé - De Marque (Québec), hébergement Canada",
            "Niveau 1 : De Marque (Québec), Canada pays adéquat UE, conforme RGPD",
        ),
        entry(
            "TEAMVIEWER",
            Restricted,
            "Allemagne",
            true,
            "Usage avec précautions - TeamViewer AG (Allemagne), infrastructure mondiale",
            "Niveau 2 : TeamViewer AG (Allemagne), infrastructure mondiale, certifié ISO 27001",
        ),
        entry(
            "THREEMA EDUCATION",
            Authorized,
            "Suisse",
            true,
            "Usage autorisé - Threema GmbH (Suisse), chiffrement E2E",
            "Niveau 1 : Threema GmbH (Pfäffikon, Suisse), chiffrement E2E, hébergement Suisse",
        ),
        entry(
            "THUNDERBIRD",
            Authorized,
            "Local",
            false,
            "Usage autorisé - Mozilla Foundation, client email local open source",
            "Niveau 1 : Mozilla Foundation, open source, client email local",
        ),
        entry(
            "TRIMBLE INC.",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Trimble Inc. (USA), SketchUp, certifié DPF",
            "Niveau 2 : Trimble Inc. (USA), SketchUp, certifié EU-US DPF",
        ),
        entry(
            "VOKAPI (app)",
            Restricted,
            "Suisse",
            true,
            "Usage avec précautions - Développeur suisse, synchronisation externe",
            "Niveau 2 : développeur suisse, hébergement Suisse, synchronisation services tiers",
        ),
        entry(
            "WAKELET",
            Restricted,
            "Royaume-Uni",
            true,
            "Usage avec précautions - Wakelet Ltd (UK), hébergement cloud",
            "Niveau 2 : Wakelet Ltd (UK), hébergement cloud, conforme RGPD UK",
        ),
        entry(
            "WAYGROUND (anc. QUIZIZZ)",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Quizizz Inc. (USA), certifié DPF, COPPA",
            "Niveau 2 : Quizizz Inc. (USA), certifié EU-US DPF, conforme COPPA",
        ),
        entry(
            "WOOCLAP",
            Restricted,
            "Union Européenne",
            true,
            "Usage avec précautions - Wooclap SA (Belgique), hébergement UE",
            "Niveau 2 : Wooclap SA (Belgique), hébergement UE, quelques services tiers",
        ),
        entry(
            "WOOFLASH",
            Authorized,
            "Union Européenne",
            true,
            "Usage autorisé - Wooclap SA (Belgique), hébergement UE",
            "Niveau 1 : Wooclap SA (Belgique), hébergement UE, conforme RGPD",
        ),
        entry(
            "WORDWALL",
            Restricted,
            "Royaume-Uni",
            true,
            "Usage avec précautions - Visual Education Ltd (UK), hébergement UK/US",
            "Niveau 2 : Visual Education Ltd (UK), hébergement UK, conforme RGPD UK",
        ),
        entry(
            "ZAPIER Et ZAPIER OUTLOOK",
            Restricted,
            "États-Unis",
            true,
            "Usage avec précautions - Zapier Inc. (USA), certifié DPF, SOC 2",
            "Niveau 2 : Zapier Inc. (USA), certifié EU-US DPF, SOC 2 Type II",
        ),
    ]
}

/// Microsoft 365 products covered by the institutional CEJEF DPA contract.
/// All share one classification: level 1 under the DPA, EU hosting option.
fn microsoft_dpa_block() -> Vec<Classification> {
    const PRODUCTS: &[&str] = &[
        "Microsoft Word",
        "Microsoft Excel",
        "Microsoft PowerPoint",
        "Microsoft OneNote",
        "Microsoft Teams",
        "Microsoft Forms",
        "Microsoft Planner",
        "Microsoft Whiteboard",
        "Microsoft OneDrive",
        "Microsoft Outlook",
        "Microsoft Clipchamp",
    ];
    PRODUCTS
        .iter()
        .map(|name| {
            entry(
                name,
                Authorized,
                "Union Européenne (option)",
                true,
                "Usage autorisé - Microsoft, contrat DPA CEJEF, hébergement UE",
                "Niveau 1 : Microsoft (USA), contrat DPA institutionnel CEJEF, hébergement UE disponible, certifié DPF/ISO 27001",
            )
        })
        .collect()
}
