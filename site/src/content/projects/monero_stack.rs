use crate::{
    content::{Block, Image, Inline, Project, ProjectSection},
    lang::LangData,
};

const DOCKER_COMPOSE: &str = "version: '3.7'
services:
  monerod:
    image: monero:latest
    ports:
      - \"18081:18081\"
      - \"18083:18083\"
    volumes:
      - ./data/monerod:/home/monero/.bitmonero
    command: --non-interactive --restricted-rpc --rpc-bind-ip=0.0.0.0
  p2pool:
    image: p2pool/p2pool:latest
    ports:
      - \"3333:3333\"
    volumes:
      - ./data/p2pool:/data
    depends_on:
      - monerod
  xmrig:
    image: xmrig/xmrig:latest
    command: [\"--url\", \"p2pool:3333\", \"--user\", \"wallet_address\"]
";

const XMRIG_BUILD: &str = "cmake -DWITH_HWLOC=ON -DHWLOC_DIR=/path/to/hwloc -DCMAKE_BUILD_TYPE=Release -DXMRIG_DEPS=scripts/deps -Bbuild -H. -march=native";

const IMAGE_ALT: LangData<&str> = LangData::new(
    "Illustration de la stack Monero",
    "Illustration of the Monero stack",
);

pub const PROJECT: Project = Project {
    id: "monero-stack",
    name: LangData::new(
        "Infrastructure Monero auto-hébergée",
        "Self-hosted Monero infrastructure",
    ),
    description: LangData::new(
        "Présentation d'une stack Docker pour héberger un nœud Monero, P2Pool et XMRig.",
        "Docker stack to host a Monero node, P2Pool and XMRig miner.",
    ),
    image: Some(Image {
        src: "/images/monero-stack-portrait.png",
        alt: IMAGE_ALT,
    }),
    card_image: Some(Image {
        src: "/images/monero-stack.png",
        alt: IMAGE_ALT,
    }),
    main_color: "orange",
    intro_sections: &[
        ProjectSection {
            id: "presentation",
            title: LangData::new("🧭 Présentation", "🧭 Presentation"),
            intro: None,
            content: Some(LangData::new(
                &[Block::Paragraph(&[Inline::Text(
                    "Cette stack Monero permet d'héberger un noeud complet, de miner via P2Pool, et de faire tourner XMRig optimisé pour ton CPU. Elle est contenue dans Docker pour être facile à maintenir, à déployer, et à isoler du reste du système.",
                )])],
                &[Block::Paragraph(&[Inline::Text(
                    "This stack lets you run a full Monero node, mine via P2Pool, and launch an XMRig miner optimized for your CPU. Fully containerized with Docker for isolation and ease of deployment.",
                )])],
            )),
            children: &[],
        },
        ProjectSection {
            id: "architecture",
            title: LangData::new("🧱 Architecture", "🧱 Architecture"),
            intro: None,
            content: Some(LangData::new(
                &[Block::List(&[
                    &[Inline::Strong("monerod"), Inline::Text(" : Nœud Monero complet")],
                    &[Inline::Strong("p2pool"), Inline::Text(" : Minage décentralisé solo")],
                    &[Inline::Strong("xmrig"), Inline::Text(" : Mineur CPU optimisé")],
                    &[Inline::Strong("Docker"), Inline::Text(" : Conteneurisation de chaque service")],
                ])],
                &[Block::List(&[
                    &[Inline::Strong("monerod"), Inline::Text(": complete Monero node")],
                    &[Inline::Strong("p2pool"), Inline::Text(": solo decentralized mining")],
                    &[Inline::Strong("xmrig"), Inline::Text(": optimized CPU miner")],
                    &[Inline::Strong("Docker"), Inline::Text(": containerization of each service")],
                ])],
            )),
            children: &[],
        },
        ProjectSection {
            id: "why",
            title: LangData::new("💡 Pourquoi faire ?", "💡 Why do it?"),
            intro: None,
            content: Some(LangData::new(
                &[Block::Paragraph(&[
                    Inline::Text("Monero est une cryptomonnaie axée sur la confidentialité, où toutes les transactions sont chiffrées par défaut. En hébergeant ta propre stack, tu gardes le contrôle total sur ta synchronisation, ton minage et tes connexions, sans dépendre de services tiers."),
                    Inline::Break,
                    Inline::Break,
                    Inline::Text("Grâce à son algorithme de minage "),
                    Inline::Strong("RandomX"),
                    Inline::Text(", Monero reste accessible au minage sur CPU, même si les performances peuvent varier fortement selon l’architecture. Ce projet est donc adapté à des profils techniques souhaitant contribuer au réseau, sécuriser leurs transactions, ou simplement apprendre à auto-héberger un système complet."),
                ])],
                &[Block::Paragraph(&[
                    Inline::Text("Monero is a privacy-focused cryptocurrency where all transactions are encrypted by default. By hosting your own stack, you maintain full control over synchronization, mining, and connections without relying on third-party services."),
                    Inline::Break,
                    Inline::Break,
                    Inline::Text("Thanks to its "),
                    Inline::Strong("RandomX"),
                    Inline::Text(" mining algorithm, Monero remains accessible for CPU mining, although performance can vary significantly depending on the architecture. This project is therefore suited for technically inclined users who want to contribute to the network, secure their transactions, or simply learn how to self-host a complete system."),
                ])],
            )),
            children: &[],
        },
    ],
    sections: &[ProjectSection {
        id: "mise-en-place",
        title: LangData::new("⚙️ Mise en place", "⚙️ Setup"),
        intro: Some(LangData::new(
            &[Block::Paragraph(&[Inline::Text(
                "Voici comment configurer chaque élément de la stack.",
            )])],
            &[Block::Paragraph(&[Inline::Text(
                "Here’s how to configure each component of the stack.",
            )])],
        )),
        content: None,
        children: &[
            ProjectSection {
                id: "compose",
                title: LangData::new("docker-compose.yml", "docker-compose.yml"),
                intro: None,
                content: Some(LangData::new(
                    &[
                        Block::Paragraph(&[
                            Inline::Text("Utilise un fichier "),
                            Inline::Code("docker-compose.yml"),
                            Inline::Text(" pour gérer les trois services : "),
                            Inline::Strong("monerod"),
                            Inline::Text(", "),
                            Inline::Strong("p2pool"),
                            Inline::Text(" et "),
                            Inline::Strong("xmrig"),
                            Inline::Text("."),
                        ]),
                        Block::Note(&[Inline::Text("Voici un exemple minimaliste :")]),
                        Block::Code(DOCKER_COMPOSE),
                    ],
                    &[
                        Block::Paragraph(&[
                            Inline::Text("Use a "),
                            Inline::Code("docker-compose.yml"),
                            Inline::Text(" file to manage the three services: "),
                            Inline::Strong("monerod"),
                            Inline::Text(", "),
                            Inline::Strong("p2pool"),
                            Inline::Text(", and "),
                            Inline::Strong("xmrig"),
                            Inline::Text("."),
                        ]),
                        Block::Note(&[Inline::Text("Here’s a minimal example:")]),
                        Block::Code(DOCKER_COMPOSE),
                    ],
                )),
                children: &[],
            },
            ProjectSection {
                id: "volumes",
                title: LangData::new("Volumes & persistance", "Volumes & persistence"),
                intro: None,
                content: Some(LangData::new(
                    &[Block::Paragraph(&[Inline::Text(
                        "Les volumes Docker garantissent la persistance de la blockchain, des fichiers wallet et des logs. Place-les dans un dossier versionné ou sauvegardé pour éviter toute perte de données en cas de mise à jour ou plantage.",
                    )])],
                    &[Block::Paragraph(&[Inline::Text(
                        "Docker volumes ensure the persistence of the blockchain, wallet files, and logs. Store them in a versioned or backed-up folder to avoid data loss during updates or crashes.",
                    )])],
                )),
                children: &[],
            },
            ProjectSection {
                id: "ports",
                title: LangData::new("Configuration réseau", "Network configuration"),
                intro: None,
                content: Some(LangData::new(
                    &[
                        Block::Paragraph(&[
                            Inline::Text("Expose les bons ports dans ton "),
                            Inline::Code("docker-compose.yml"),
                            Inline::Text(" ou dans Traefik :"),
                        ]),
                        Block::List(&[
                            &[Inline::Code("18081"), Inline::Text(" : RPC public de monerod")],
                            &[Inline::Code("18083"), Inline::Text(" : RPC Wallet (optionnel mais utile en local)")],
                            &[Inline::Code("3333"), Inline::Text(" : Port P2Pool pour XMRig")],
                        ]),
                    ],
                    &[
                        Block::Paragraph(&[
                            Inline::Text("Expose the proper ports in your "),
                            Inline::Code("docker-compose.yml"),
                            Inline::Text(" or in Traefik:"),
                        ]),
                        Block::List(&[
                            &[Inline::Code("18081"), Inline::Text(": monerod public RPC")],
                            &[Inline::Code("18083"), Inline::Text(": Wallet RPC (optional but useful locally)")],
                            &[Inline::Code("3333"), Inline::Text(": P2Pool port for XMRig")],
                        ]),
                    ],
                )),
                children: &[],
            },
            ProjectSection {
                id: "xmrig",
                title: LangData::new("XMRig optimisé", "XMRig optimization"),
                intro: None,
                content: Some(LangData::new(
                    &[
                        Block::Paragraph(&[Inline::Text(
                            "Pour de meilleures performances, compile XMRig directement sur la machine cible avec :",
                        )]),
                        Block::Code(XMRIG_BUILD),
                        Block::Note(&[
                            Inline::Text("Sinon, utilise une image Docker comme "),
                            Inline::Code("xmrig/xmrig:latest"),
                            Inline::Text(", moins performante mais plus rapide à déployer."),
                        ]),
                    ],
                    &[
                        Block::Paragraph(&[Inline::Text(
                            "For better performance, compile XMRig directly on the target machine using:",
                        )]),
                        Block::Code(XMRIG_BUILD),
                        Block::Note(&[
                            Inline::Text("Otherwise, use a Docker image like "),
                            Inline::Code("xmrig/xmrig:latest"),
                            Inline::Text(", which is less performant but quicker to deploy."),
                        ]),
                    ],
                )),
                children: &[],
            },
            ProjectSection {
                id: "wallet",
                title: LangData::new("Connexion wallet", "Wallet connection"),
                intro: None,
                content: Some(LangData::new(
                    &[
                        Block::Paragraph(&[
                            Inline::Text("Si ton nœud est accessible depuis l’extérieur (via Traefik et HTTPS), tu peux le connecter à "),
                            Inline::Strong("Cake Wallet"),
                            Inline::Text(" ou "),
                            Inline::Strong("Monerujo"),
                            Inline::Text(" en ajoutant un nœud personnalisé :"),
                        ]),
                        Block::List(&[
                            &[Inline::Text("Adresse : "), Inline::Code("https://monero.monsite.fr")],
                            &[Inline::Text("Port : "), Inline::Code("443"), Inline::Text(" (grâce au reverse proxy)")],
                            &[Inline::Text("Type : Nœud distant personnalisé (custom node)")],
                        ]),
                    ],
                    &[
                        Block::Paragraph(&[
                            Inline::Text("If your node is accessible from the outside (via Traefik and HTTPS), you can connect it to "),
                            Inline::Strong("Cake Wallet"),
                            Inline::Text(" or "),
                            Inline::Strong("Monerujo"),
                            Inline::Text(" by adding a custom node:"),
                        ]),
                        Block::List(&[
                            &[Inline::Text("Address: "), Inline::Code("https://monero.mysite.com")],
                            &[Inline::Text("Port: "), Inline::Code("443"), Inline::Text(" (thanks to the reverse proxy)")],
                            &[Inline::Text("Type: Custom remote node")],
                        ]),
                    ],
                )),
                children: &[],
            },
        ],
    }],
};
