//! Home page - the whole portfolio on one scrolling page.
//!
//! Sections fade in one after another, each a few `BLUR_FADE_DELAY` steps
//! after the previous one.

use std::sync::Arc;

use dioxus::prelude::*;
use folio_ui::{
    AnimatedGridPattern, AuroraText, Badge, BlurFade, ButtonVariant, CircularGauge, FadeTiming,
    LinkButton, SparklesText,
};

use crate::components::{Markdown, ProjectCard, ResumeCard};
use crate::context::use_portfolio;
use crate::theme::colors;

/// Spacing between items inside one section, in seconds
const ITEM_STAGGER: f64 = 0.05;

#[component]
pub fn Home() -> Element {
    let portfolio = use_portfolio();
    let greeting = format!("Hi, I'm {} 👋", portfolio.first_name());
    let projects: Vec<(String, Arc<_>)> = portfolio
        .projects
        .iter()
        .map(|project| (project.slug(), Arc::new(project.clone())))
        .collect();

    rsx! {
        main { class: "home",
            // Hero
            section { id: "hero", class: "section section--hero",
                AnimatedGridPattern { num_squares: 30, max_opacity: 0.1, duration: 3.0 }
                div { class: "hero",
                    div { class: "hero__text",
                        BlurFade { timing: FadeTiming { y_offset: 8.0, ..FadeTiming::staggered(1.0, 0, 0.0) },
                            h1 { class: "hero__greeting", "{greeting}" }
                        }
                        BlurFade { timing: FadeTiming::staggered(1.0, 0, 0.0),
                            p { class: "hero__description", "{portfolio.description}" }
                        }
                    }
                    BlurFade { timing: FadeTiming::staggered(1.0, 0, 0.0),
                        div { class: "avatar",
                            if let Some(url) = portfolio.avatar_url.clone() {
                                img { class: "avatar__img", src: "{url}", alt: "{portfolio.name}" }
                            } else {
                                span { class: "avatar__fallback", "{portfolio.initials}" }
                            }
                        }
                    }
                }
            }

            // About
            if !portfolio.summary.trim().is_empty() {
                section { id: "about", class: "section",
                    BlurFade { timing: FadeTiming::staggered(3.0, 0, 0.0),
                        h2 { class: "section__title", SparklesText { AuroraText { "About" } } }
                    }
                    BlurFade { timing: FadeTiming::staggered(4.0, 0, 0.0),
                        Markdown { content: portfolio.summary.clone() }
                    }
                }
            }

            // Work Experience
            if !portfolio.work.is_empty() {
                section { id: "work", class: "section",
                    BlurFade { timing: FadeTiming::staggered(5.0, 0, 0.0),
                        h2 { class: "section__title", SparklesText { AuroraText { "Work Experience" } } }
                    }
                    for (id, work) in portfolio.work.iter().enumerate() {
                        BlurFade {
                            key: "{work.company}-{id}",
                            timing: FadeTiming::staggered(6.0, id, ITEM_STAGGER),
                            ResumeCard {
                                title: work.company.clone(),
                                subtitle: Some(work.title.clone()),
                                href: work.href.clone(),
                                logo_url: work.logo_url.clone(),
                                badges: work.badges.clone(),
                                period: work.period(),
                                description: Some(work.description.clone()),
                            }
                        }
                    }
                }
            }

            // Education
            if !portfolio.education.is_empty() {
                section { id: "education", class: "section",
                    BlurFade { timing: FadeTiming::staggered(7.0, 0, 0.0),
                        h2 { class: "section__title", "Education" }
                    }
                    for (id, education) in portfolio.education.iter().enumerate() {
                        BlurFade {
                            key: "{education.school}-{id}",
                            timing: FadeTiming::staggered(8.0, id, ITEM_STAGGER),
                            ResumeCard {
                                title: education.school.clone(),
                                subtitle: Some(education.degree.clone()),
                                href: education.href.clone(),
                                logo_url: education.logo_url.clone(),
                                period: education.period(),
                            }
                        }
                    }
                }
            }

            // Skills
            section { id: "skills", class: "section",
                BlurFade { timing: FadeTiming::staggered(9.0, 0, 0.0),
                    h2 { class: "section__title", AuroraText { "Skills" } }
                }
                div { class: "badge-list",
                    for (id, skill) in portfolio.skills.iter().enumerate() {
                        BlurFade { key: "{skill}", timing: FadeTiming::staggered(10.0, id, ITEM_STAGGER),
                            Badge { "{skill}" }
                        }
                    }
                }
                div { class: "gauge-grid",
                    for (id, level) in portfolio.skill_levels.iter().enumerate() {
                        BlurFade {
                            key: "{level.name}",
                            timing: FadeTiming::staggered(10.0 + id as f64 * 0.1, 0, 0.0),
                            CircularGauge {
                                value: level.value,
                                min: level.min,
                                max: level.max,
                                label: level.name.clone(),
                                primary_color: colors::ACCENT,
                                secondary_color: colors::ACCENT_SOFT,
                            }
                        }
                    }
                }
            }

            // Projects
            if !projects.is_empty() {
                section { id: "projects", class: "section section--wide",
                    BlurFade { timing: FadeTiming::staggered(11.0, 0, 0.0),
                        div { class: "section__intro",
                            span { class: "section__eyebrow", AuroraText { "My Projects" } }
                            h2 { class: "section__title", SparklesText { AuroraText { "Check out my latest work" } } }
                        }
                    }
                    div { class: "project-grid",
                        for (id, (slug, project)) in projects.into_iter().enumerate() {
                            ProjectCard {
                                key: "{slug}",
                                timing: FadeTiming::staggered(12.0 + id as f64 * ITEM_STAGGER, 0, 0.0),
                                project: project,
                            }
                        }
                    }
                }
            }

            // Contact
            if !portfolio.contact.is_empty() {
                section { id: "contact", class: "section",
                    BlurFade { timing: FadeTiming::staggered(16.0, 0, 0.0),
                        h2 { class: "section__title", AuroraText { "Contact" } }
                        div { class: "contact-links",
                            for link in portfolio.contact.iter() {
                                LinkButton {
                                    key: "{link.href}",
                                    href: link.href.clone(),
                                    variant: ButtonVariant::Outline,
                                    external: link.kind.is_external(),
                                    "{link.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
