// localized page strings
use super::{Block, Inline, RichText};
use crate::lang::LangData;

pub const DEFAULT_TITLE: &str = "nicolas-metivier";

pub const HOME_TITLE: LangData<&str> =
    LangData::new("Accueil - Nicolas Métivier", "Home - Nicolas Métivier");

pub const HOME_DESCRIPTION: LangData<&str> = LangData::new(
    "Développeur indépendant, formateur, conseiller, créateur et auto-hébergeur passionné.",
    "Independent developer, trainer, advisor, creator and passionate self-hoster.",
);

pub const HERO_TITLE: LangData<&[Inline]> = LangData::new(
    &[
        Inline::Text("Salut, moi c’est Nicolas Métivier"),
        Inline::Break,
        Inline::Text("aussi MNLaugh"),
    ],
    &[
        Inline::Text("Hi, I'm Nicolas Métivier"),
        Inline::Break,
        Inline::Text("also MNLaugh"),
    ],
);

pub const HERO_CONTENT: LangData<RichText> = LangData::new(
    &[
        Block::Paragraph(&[Inline::Text(
            "Développeur indépendant et formateur, j’aide particuliers, associations et pros à concevoir des outils simples, robustes et durables.",
        )]),
        Block::Paragraph(&[Inline::Text(
            "J’aime le code clair, l’auto-hébergement, la vie privée numérique et les logiciels libres.",
        )]),
        Block::Paragraph(&[Inline::Text(
            "Je construis sur-mesure, je documente, j’explique, et parfois je joue de la guitare.",
        )]),
    ],
    &[
        Block::Paragraph(&[Inline::Text(
            "I'm an independent developer and trainer, helping individuals, nonprofits and professionals build simple, reliable and long-lasting tools.",
        )]),
        Block::Paragraph(&[Inline::Text(
            "I care about clean code, self-hosting, digital privacy, and free software.",
        )]),
        Block::Paragraph(&[Inline::Text(
            "I build tailor-made solutions, I document, I explain, and sometimes I play guitar.",
        )]),
    ],
);

pub const SCROLL_ARROW_LABEL: LangData<&str> =
    LangData::new("Aller à la section suivante", "Go to the next section");

pub const PROJECTS_TITLE: LangData<&str> = LangData::new("Projets", "Projects");

pub const PERSONAL_TITLE: LangData<&str> = LangData::new(
    "Projets personnels & expérimentations",
    "Personal projects & experiments",
);

pub const SITES_TITLE: LangData<&str> = LangData::new("Sites réalisés", "Sites made");

pub const CERTS_TITLE: LangData<&str> = LangData::new("Certificats", "Certifications");

pub const MUSIC_TITLE: LangData<&str> = LangData::new("Musique", "Music");

pub const CONTACT_TITLE: LangData<&str> = LangData::new("Contact", "Contact");

pub const CONTACT_TEXT: LangData<&str> = LangData::new(
    "Si tu veux discuter d’un projet, poser une question ou simplement dire bonjour :",
    "If you want to discuss a project, ask a question or just say hello:",
);

pub const SEE_PROJECT: LangData<&str> = LangData::new("Voir le projet", "See the project");

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterText {
    pub made: &'static str,
    pub by: &'static str,
    pub built: &'static str,
}

pub const FOOTER: LangData<FooterText> = LangData::new(
    FooterText {
        made: "Réalisé avec",
        by: "par moi même et mes petites mains",
        built: "Construit avec",
    },
    FooterText {
        made: "Made with",
        by: "by myself and my little hands",
        built: "Built with",
    },
);

// what the footer credits, in order
pub const BUILT_WITH: [(&str, &str); 4] = [
    ("Rust", "https://www.rust-lang.org/"),
    ("Axum", "https://github.com/tokio-rs/axum"),
    ("Dioxus", "https://dioxuslabs.com/"),
    ("Lucide Icons", "https://lucide.dev/"),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotFoundText {
    pub title: &'static str,
    pub text: &'static str,
    pub button: &'static str,
}

pub const NOT_FOUND: LangData<NotFoundText> = LangData::new(
    NotFoundText {
        title: "404 - Page non trouvée",
        text: "La page que vous cherchez n’existe pas.",
        button: "Retour à l’accueil",
    },
    NotFoundText {
        title: "404 - Page not found",
        text: "The page you were looking for doesn't exist.",
        button: "Go back home",
    },
);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewText {
    pub notice: &'static str,
    pub not_original: &'static str,
    pub visit: &'static str,
}

pub const PREVIEW: LangData<PreviewText> = LangData::new(
    PreviewText {
        notice: "Vous consultez actuellement ce site via une page d'aperçu sur",
        not_original: "Vous n'êtes pas directement sur le site Web d'origine.",
        visit: "Accéder au site original",
    },
    PreviewText {
        notice: "You are currently viewing this site through a preview page on",
        not_original: "You are not directly on the original website.",
        visit: "Visit the original site",
    },
);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorsPageText {
    pub title: &'static str,
    pub search: &'static str,
}

pub const COLORS_PAGE: LangData<ColorsPageText> = LangData::new(
    ColorsPageText {
        title: "Couleurs Tailwind disponibles",
        search: "Rechercher une couleur...",
    },
    ColorsPageText {
        title: "Available Tailwind Colors",
        search: "Search a color...",
    },
);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconMetaLabels {
    pub name: &'static str,
    pub tags: &'static str,
    pub categories: &'static str,
    pub contributors: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconsPageText {
    pub title: &'static str,
    pub search: &'static str,
    pub categories: &'static str,
    pub meta: IconMetaLabels,
    pub screen_alert: &'static str,
}

pub const ICONS_PAGE: LangData<IconsPageText> = LangData::new(
    IconsPageText {
        title: "Icônes disponibles",
        search: "Rechercher des icônes...",
        categories: "Catégories",
        meta: IconMetaLabels {
            name: "Nom",
            tags: "Étiquette",
            categories: "Catégories",
            contributors: "Contributeurs",
        },
        screen_alert: "Cette page n'est pas optimisée pour la visualisation mobile. Pour une meilleure expérience, veuillez utiliser un écran plus grand.",
    },
    IconsPageText {
        title: "Available Icons",
        search: "Search icons...",
        categories: "Categories",
        meta: IconMetaLabels {
            name: "Name",
            tags: "Tags",
            categories: "Categories",
            contributors: "Contributors",
        },
        screen_alert: "This page is not optimized for mobile viewing. For a better experience, please use a larger screen.",
    },
);

pub const COPIED: LangData<&str> =
    LangData::new("Copié dans le presse-papiers", "Copied to clipboard");

pub const NAME_COPIED: LangData<&str> = LangData::new(
    "Nom copié dans le presse-papiers",
    "Name copied in the clipboard",
);

pub const COPY: LangData<&str> = LangData::new("Copier", "Copy");

// heading of the outline group that collects sub-sections without a parent
pub const OUTLINE_FALLBACK: LangData<&str> = LangData::new("Autres", "Other");

pub const OPEN_NAVIGATION: LangData<&str> =
    LangData::new("Ouvrir la navigation", "Open navigation");

pub const OPEN_FILTERS: LangData<&str> = LangData::new("Ouvrir les filtres", "Open filters");

pub const TOGGLE_DARK: LangData<&str> =
    LangData::new("Basculer le mode sombre", "Toggle dark mode");

pub const CHANGE_LANGUAGE: LangData<&str> = LangData::new("Changer de langue", "Change language");

pub const CLOSE: LangData<&str> = LangData::new("Fermer", "Close");
