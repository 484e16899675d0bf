use dioxus::prelude::*;

use crate::core::reveal::{reveal_style, RevealTiming};

use super::header::AnchorLink;
use super::image::SafeImage;
use super::reveal::use_reveal;
use super::text::Text;
use super::PageSignals;

const CELLAR_IMAGE: &str = "./images/cellar.svg";

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "top", class: "hero",
            div { class: "hero-content",
                h1 { Text { i18n: "hero.title", fallback: "Wine management software built for modern wineries" } }
                p { class: "hero-subtitle",
                    Text {
                        i18n: "hero.subtitle",
                        fallback: "From the vineyard to the tasting room, WineSoft keeps your cellar, sales and compliance in one place."
                    }
                }
                div { class: "hero-actions",
                    AnchorLink { href: "#contact", class: "btn btn-primary",
                        Text { i18n: "hero.cta", fallback: "Request a demo" }
                    }
                    AnchorLink { href: "#features", class: "btn btn-secondary",
                        Text { i18n: "hero.secondary", fallback: "Explore features" }
                    }
                }
            }
        }
    }
}

struct FeatureCard {
    id: &'static str,
    icon: &'static str,
    title_key: &'static str,
    title: &'static str,
    description_key: &'static str,
    description: &'static str,
}

static FEATURE_CARDS: [FeatureCard; 6] = [
    FeatureCard {
        id: "feature-inventory",
        icon: "🍾",
        title_key: "features.items.inventory.title",
        title: "Cellar inventory",
        description_key: "features.items.inventory.description",
        description: "Track barrels, tanks and bottled stock by lot, vintage and location in real time.",
    },
    FeatureCard {
        id: "feature-production",
        icon: "🍇",
        title_key: "features.items.production.title",
        title: "Production planning",
        description_key: "features.items.production.description",
        description: "Schedule harvest, fermentation and bottling runs with work orders your team can follow.",
    },
    FeatureCard {
        id: "feature-sales",
        icon: "🛒",
        title_key: "features.items.sales.title",
        title: "Sales & wine club",
        description_key: "features.items.sales.description",
        description: "Manage orders, distributors and club shipments without juggling spreadsheets.",
    },
    FeatureCard {
        id: "feature-analytics",
        icon: "📊",
        title_key: "features.items.analytics.title",
        title: "Analytics",
        description_key: "features.items.analytics.description",
        description: "See margins per label and forecast demand before the next release.",
    },
    FeatureCard {
        id: "feature-compliance",
        icon: "📋",
        title_key: "features.items.compliance.title",
        title: "Compliance reports",
        description_key: "features.items.compliance.description",
        description: "Generate excise and regulatory reports straight from your production records.",
    },
    FeatureCard {
        id: "feature-mobile",
        icon: "📱",
        title_key: "features.items.mobile.title",
        title: "On the cellar floor",
        description_key: "features.items.mobile.description",
        description: "Record additions and tastings from any phone or tablet, even offline.",
    },
];

#[component]
pub fn Features() -> Element {
    let reveal = use_context::<PageSignals>().reveal;
    use_reveal(&FEATURE_CARDS, |card| card.id);
    let tracker = reveal.read();

    rsx! {
        section { id: "features", class: "features",
            div { class: "section-header",
                h2 { Text { i18n: "features.title", fallback: "Everything your winery needs" } }
                p { Text { i18n: "features.subtitle", fallback: "One platform that grows with every vintage." } }
            }
            div { class: "features-grid",
                for (index, card) in FEATURE_CARDS.iter().enumerate() {
                    div {
                        key: "{card.id}",
                        id: card.id,
                        class: "feature-card",
                        style: reveal_style(index, RevealTiming::FEATURE_CARDS, tracker.is_revealed(card.id)),
                        div { class: "feature-icon", aria_hidden: "true", "{card.icon}" }
                        h3 { Text { i18n: card.title_key, fallback: card.title } }
                        p { Text { i18n: card.description_key, fallback: card.description } }
                    }
                }
            }
        }
    }
}

struct Stat {
    value: &'static str,
    key: &'static str,
    label: &'static str,
}

static STATS: [Stat; 3] = [
    Stat {
        value: "250+",
        key: "about.stats.wineries",
        label: "Wineries",
    },
    Stat {
        value: "4M",
        key: "about.stats.bottles",
        label: "Bottles tracked",
    },
    Stat {
        value: "12",
        key: "about.stats.countries",
        label: "Countries",
    },
];

static ABOUT_IDS: [&str; 2] = ["about-text", "about-visual"];

#[component]
pub fn About() -> Element {
    let reveal = use_context::<PageSignals>().reveal;
    use_reveal(&ABOUT_IDS, |id| *id);
    let tracker = reveal.read();
    let text_style = reveal_style(0, RevealTiming::ABOUT_BLOCKS, tracker.is_revealed(ABOUT_IDS[0]));
    let visual_style = reveal_style(1, RevealTiming::ABOUT_BLOCKS, tracker.is_revealed(ABOUT_IDS[1]));

    rsx! {
        section { id: "about", class: "about",
            div { class: "about-content",
                div { id: ABOUT_IDS[0], class: "about-text", style: text_style,
                    h2 { Text { i18n: "about.title", fallback: "Made by winemakers and engineers" } }
                    p {
                        Text {
                            i18n: "about.text1",
                            fallback: "WineSoft started in a family winery that outgrew its notebooks. Today it helps producers of every size keep their craft organised."
                        }
                    }
                    p {
                        Text {
                            i18n: "about.text2",
                            fallback: "We work closely with our customers every harvest, so the product evolves with the realities of the cellar."
                        }
                    }
                    div { class: "about-stats",
                        for stat in STATS.iter() {
                            div { key: "{stat.key}", class: "stat",
                                span { class: "stat-number", "{stat.value}" }
                                span { class: "stat-label", Text { i18n: stat.key, fallback: stat.label } }
                            }
                        }
                    }
                }
                div { id: ABOUT_IDS[1], class: "about-visual", style: visual_style,
                    SafeImage { src: CELLAR_IMAGE, alt: "Barrels in a wine cellar", class: "about-image" }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-content",
                p { class: "footer-brand",
                    "WineSoft · "
                    Text { i18n: "footer.tagline", fallback: "Software for the craft of wine." }
                }
                p { class: "footer-rights",
                    "© WineSoft. "
                    Text { i18n: "footer.rights", fallback: "All rights reserved." }
                }
            }
        }
    }
}
