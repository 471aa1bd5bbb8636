use crate::{
    content::{Block, Image, Inline, Project, ProjectSection},
    lang::LangData,
};

pub const PROJECT: Project = Project {
    id: "deno-logger",
    name: LangData::new("Deno Logger", "Deno Logger"),
    description: LangData::new(
        "Petit module TypeScript pour des logs colorés et structurés dans des projets Deno. Disponible sur jsr.io.",
        "Small TypeScript module for colored and structured logs in Deno projects. Available on jsr.io.",
    ),
    image: Some(Image {
        src: "/images/deno-logger.png",
        alt: LangData::new("Deno Logger de MNLaugh", "Deno Logger by MNLaugh"),
    }),
    card_image: None,
    main_color: "blue",
    intro_sections: &[ProjectSection {
        id: "presentation",
        title: LangData::new("🧭 Présentation", "🧭 Presentation"),
        intro: None,
        content: Some(LangData::new(
            &[Block::Paragraph(&[
                Inline::Text("Ce projet permet de surveiller automatiquement les streams Twitch de tes amis en temps réel. Lorsqu’un stream démarre ou se termine, un message personnalisé est généré par une IA et envoyé dans un salon Discord via un webhook configuré."),
                Inline::Break,
                Inline::Break,
                Inline::Text("L’authentification OAuth permet à l’administrateur de se connecter avec son compte Twitch pour gérer la liste des streamers à suivre, tandis qu’un panneau d’administration simple offre un contrôle total sur les paramètres et les webhooks utilisés."),
            ])],
            &[Block::Paragraph(&[
                Inline::Text("This project enables real-time monitoring of your friends’ Twitch streams. When a stream starts or ends, an AI-generated custom message is sent to a Discord channel via a configured webhook."),
                Inline::Break,
                Inline::Break,
                Inline::Text("OAuth authentication lets the admin log in with their Twitch account to manage the list of followed streamers. A simple admin panel provides full control over settings and connected webhooks."),
            ])],
        )),
        children: &[],
    }],
    sections: &[ProjectSection {
        id: "architecture",
        title: LangData::new("🧱 Architecture", "🧱 Architecture"),
        intro: None,
        content: Some(LangData::new(
            &[Block::List(&[
                &[Inline::Strong("API Twitch"), Inline::Text(" : Souscription aux événements (online/offline) via Webhooks ou EventSub.")],
                &[Inline::Strong("OAuth 2.0"), Inline::Text(" : Authentification de l’utilisateur admin pour récupérer les tokens nécessaires.")],
                &[Inline::Strong("Générateur IA"), Inline::Text(" : Création automatique de messages personnalisés selon le contexte du stream.")],
                &[Inline::Strong("Webhook Discord"), Inline::Text(" : Envoi des messages dans les salons Discord configurés.")],
                &[Inline::Strong("Panneau d'administration"), Inline::Text(" : Interface web pour gérer les streamers, les webhooks et les préférences.")],
                &[Inline::Strong("Serveur léger"), Inline::Text(" : Application auto-hébergée construite avec Deno + Fresh pour un déploiement simple.")],
                &[Inline::Strong("Docker"), Inline::Text(" : Tout ça dans un conteneur Docker")],
            ])],
            &[Block::List(&[
                &[Inline::Strong("Twitch API"), Inline::Text(": Subscribes to stream online/offline events via Webhooks or EventSub.")],
                &[Inline::Strong("OAuth 2.0"), Inline::Text(": Admin user authentication to retrieve the required tokens.")],
                &[Inline::Strong("AI generator"), Inline::Text(": Automatically creates personalized messages depending on the stream context.")],
                &[Inline::Strong("Discord Webhook"), Inline::Text(": Sends the messages to configured Discord channels.")],
                &[Inline::Strong("Admin panel"), Inline::Text(": Web interface to manage streamers, webhooks, and preferences.")],
                &[Inline::Strong("Lightweight server"), Inline::Text(": Self-hosted app built with Deno + Fresh for simple deployment.")],
                &[Inline::Strong("Docker"), Inline::Text(": All this in a docker container")],
            ])],
        )),
        children: &[],
    }],
};
