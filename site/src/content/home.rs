use super::{Cert, Contact, Inline, Music, Site};
use crate::lang::LangData;

pub const SITES: &[Site] = &[Site {
    id: "poule-noire",
    name: "La Poule Noire du Berry",
    url: "http://lapoulenoireduberry.com",
    target_self: true,
    image: "lapoulenoireduberry.png",
    description: LangData::new(
        "Site web réalisé pour l'association de la Poule Noire du Berry. Développement, hébergement et accompagnement technique.",
        "Website produced for the Berry Black Hen association. Development, hosting and technical support.",
    ),
}];

pub const CERTS: &[Cert] = &[Cert {
    id: "mooc",
    name: LangData::new(
        "SecNumacadémie – MOOC Cybersécurité",
        "SecNumacadémie – MOOC Cybersecurity",
    ),
    description: LangData::new(
        &[
            Inline::Text("Attestation délivrée par l’ANSSI"),
            Inline::Break,
            Inline::Text("Date d'obtention : 15 juillet 2025"),
            Inline::Break,
            Inline::Text("Modules validés avec 100 % de réussite"),
        ],
        &[
            Inline::Text("Certificate issued by the ANSSI"),
            Inline::Break,
            Inline::Text("Date of obtaining: July 15, 2025"),
            Inline::Break,
            Inline::Text("Validated modules with 100 % success"),
        ],
    ),
    image: "https://secnumacademie.gouv.fr/resources/assets/images/logo.png",
    file: "attestation-secnumacademie.pdf",
}];

pub const MUSIC: &[Music] = &[
    Music {
        id: "le-gorille",
        name: "Le gorille",
        image: "distrokid-le-gorille.jpeg",
    },
    Music {
        id: "mon-fils-ma-bataille-reggae",
        name: "Mon fils ma bataille Reggae",
        image: "distrokid-mon-fils.jpeg",
    },
    Music {
        id: "aione",
        name: "AIone",
        image: "distrokid-ione.png",
    },
];

pub const CONTACTS: &[Contact] = &[
    Contact {
        label: LangData::new("Me contacter par mail", "Contact by mail"),
        url: "mailto:contact@nicolas-metivier.fr",
        icon: "at-sign",
        color: "blue",
    },
    Contact {
        label: LangData::new("Mon serveur Discord", "My Discord server"),
        url: "https://discord.gg/QP27TCFwe9",
        icon: "discord",
        color: "indigo",
    },
    Contact {
        label: LangData::new("Mon profil LinkedIn", "My LinkedIn profile"),
        url: "https://www.linkedin.com/in/mnlaugh/",
        icon: "linkedin",
        color: "sky",
    },
    Contact {
        label: LangData::new("Mon profil Github", "My Github profile"),
        url: "https://github.com/MNLaugh/",
        icon: "github",
        color: "gray",
    },
];
