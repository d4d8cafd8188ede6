use super::*;
use crate::{
    catalog::{CvEntry, Project, VideoPosition},
    model::{CERTIFICATION_WINDOW_ID, CV_WINDOW_ID},
};

/// Chooses the renderer for a window's content.
pub(super) fn render_window_content(window_id: &WindowId, content: &WindowContent) -> View {
    match content {
        WindowContent::Folder => {
            view! { <FolderContent folder_id=window_id.as_str().to_string() /> }.into_view()
        }
        WindowContent::About => view! { <AboutContent /> }.into_view(),
        WindowContent::Cv => view! { <CvContent /> }.into_view(),
        WindowContent::Certification => view! { <CertificationContent /> }.into_view(),
        WindowContent::NavGuide => view! { <NavGuideContent /> }.into_view(),
        WindowContent::Project(project) => {
            view! { <ProjectDetail project=(**project).clone() /> }.into_view()
        }
    }
}

#[component]
fn FolderContent(folder_id: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let projects = catalog().projects_in(&folder_id);

    view! {
        <div class="project-grid">
            {projects
                .iter()
                .map(|project| {
                    let project_id = project.id.clone();
                    let cover = project
                        .hover_image_url
                        .clone()
                        .unwrap_or_else(|| project.image_url.clone());
                    view! {
                        <button
                            class="project-card"
                            on:click=move |_| {
                                runtime
                                    .dispatch_action(DesktopAction::OpenProject {
                                        project_id: project_id.clone(),
                                    })
                            }
                        >
                            <img src=project.image_url.clone() data-hover-src=cover alt="" loading="lazy" />
                            <span class="project-card-title">{project.title.clone()}</span>
                            <span class="project-card-description">{project.description.clone()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn AboutContent() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let about = &catalog().pages.about;
    let open_page = move |id: &'static str| {
        runtime.dispatch_action(DesktopAction::OpenWindow {
            window_id: WindowId::from(id),
        })
    };

    view! {
        <article class="about-content">
            {about
                .portrait_url
                .clone()
                .map(|url| view! { <img class="about-portrait" src=url alt=about.name.clone() /> })}
            <h1>{about.name.clone()}</h1>
            <ul class="about-roles">
                {about.roles.iter().map(|role| view! { <li>{role.clone()}</li> }).collect_view()}
            </ul>
            {about.bio.iter().map(|paragraph| view! { <p>{paragraph.clone()}</p> }).collect_view()}
            <dl class="about-links">
                {about
                    .links
                    .iter()
                    .map(|link| {
                        view! {
                            <dt>{link.label.clone()}</dt>
                            <dd>
                                <a href=link.url.clone() target="_blank" rel="noopener noreferrer">
                                    {link.text.clone()}
                                </a>
                            </dd>
                        }
                    })
                    .collect_view()}
            </dl>
            <div class="about-actions">
                <button class="about-action" on:click=move |_| open_page(CV_WINDOW_ID)>
                    "View CV"
                </button>
                <button class="about-action" on:click=move |_| open_page(CERTIFICATION_WINDOW_ID)>
                    {catalog().pages.certification.title.clone()}
                </button>
            </div>
        </article>
    }
}

#[component]
fn CvContent() -> impl IntoView {
    let cv = &catalog().pages.cv;

    view! {
        <article class="cv-content">
            <header>
                <h1>{cv.name.clone()}</h1>
                <p class="cv-headline">{cv.headline.clone()}</p>
            </header>
            {cv
                .sections
                .iter()
                .map(|section| {
                    view! {
                        <section class="cv-section">
                            <h2>{section.heading.clone()}</h2>
                            {section.entries.iter().map(cv_entry_view).collect_view()}
                        </section>
                    }
                })
                .collect_view()}
        </article>
    }
}

fn cv_entry_view(entry: &CvEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let target = match (&entry.project_id, &entry.folder_id) {
        (Some(project_id), _) => Some(DesktopAction::OpenProject {
            project_id: project_id.clone(),
        }),
        (None, Some(folder_id)) => Some(DesktopAction::OpenWindow {
            window_id: WindowId::new(folder_id.clone()),
        }),
        (None, None) => None,
    };
    let title = match target {
        Some(action) => view! {
            <button class="cv-entry-link" on:click=move |_| runtime.dispatch_action(action.clone())>
                {entry.title.clone()}
            </button>
        }
        .into_view(),
        None => view! { <span class="cv-entry-title">{entry.title.clone()}</span> }.into_view(),
    };

    view! {
        <div class="cv-entry">
            {title}
            {entry.period.clone().map(|period| view! { <span class="cv-entry-period">{period}</span> })}
            {entry.detail.clone().map(|detail| view! { <p class="cv-entry-detail">{detail}</p> })}
        </div>
    }
}

#[component]
fn CertificationContent() -> impl IntoView {
    let page = &catalog().pages.certification;

    view! {
        <figure class="certification-content">
            <img src=page.image_url.clone() alt=page.title.clone() />
        </figure>
    }
}

#[component]
fn NavGuideContent() -> impl IntoView {
    let guide = &catalog().pages.nav_guide;

    view! {
        <ol class="nav-guide-content">
            {guide.steps.iter().map(|step| view! { <li>{step.clone()}</li> }).collect_view()}
        </ol>
    }
}

/// Single external site with no gallery renders as an embedded page.
fn embeds_external_site(project: &Project) -> bool {
    project.external_url.is_some() && project.images.len() <= 1
}

#[component]
fn ProjectDetail(project: Project) -> impl IntoView {
    let runtime = use_desktop_runtime();

    if embeds_external_site(&project) {
        let url = project.external_url.clone().unwrap_or_default();
        return view! {
            <div class="project-embed">
                <a class="project-embed-open" href=url.clone() target="_blank" rel="noopener noreferrer">
                    "Open in new tab"
                </a>
                <iframe src=url title=project.title.clone() />
            </div>
        }
        .into_view();
    }

    let video = project.video_url.clone().map(|url| {
        view! {
            <div class="project-video">
                <iframe src=url title=project.title.clone() allowfullscreen=true />
            </div>
        }
    });
    let (video_top, video_bottom) = match project.video_position {
        VideoPosition::Top => (video, None),
        VideoPosition::Bottom => (None, video),
    };

    let links = [
        ("Website", project.external_url.clone()),
        ("Gallery", project.gallery_url.clone()),
        ("Listen", project.spotify_url.clone()),
        ("PDF", project.pdf_url.clone()),
        ("Paper", project.paper_url.clone()),
        ("Prototype", project.prototype_url.clone()),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.map(|url| (label, url)))
    .map(|(label, url)| {
        view! {
            <a class="project-link" href=url target="_blank" rel="noopener noreferrer">
                {label}
            </a>
        }
    })
    .collect_view();

    let related = project.related_project_id.clone().map(|related_id| {
        let label = project
            .related_project_title
            .clone()
            .unwrap_or_else(|| "View Related Project".to_string());
        view! {
            <button
                class="project-related"
                on:click=move |_| {
                    runtime
                        .dispatch_action(DesktopAction::OpenProject {
                            project_id: related_id.clone(),
                        })
                }
            >
                {label}
            </button>
        }
    });

    view! {
        <article class="project-detail">
            <header>
                <h1>{project.title.clone()}</h1>
                <p class="project-description">{project.description.clone()}</p>
                <div class="project-tags">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            let query = tag.clone();
                            view! {
                                <button
                                    class="project-tag"
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::SearchTag { tag: query.clone() })
                                    }
                                >
                                    {format!("#{tag}")}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {project.award.clone().map(|award| view! { <p class="project-award">{award}</p> })}
            </header>
            {video_top}
            {project
                .abstract_text
                .clone()
                .map(|text| view! { <section class="project-abstract"><p>{text}</p></section> })}
            {(!project.research_questions.is_empty())
                .then(|| {
                    view! {
                        <ol class="project-research-questions">
                            {project
                                .research_questions
                                .iter()
                                .map(|question| view! { <li>{question.clone()}</li> })
                                .collect_view()}
                        </ol>
                    }
                })}
            {(!project.specs.is_empty())
                .then(|| {
                    view! {
                        <dl class="project-specs">
                            {project
                                .specs
                                .iter()
                                .map(|row| {
                                    view! {
                                        <dt>{row.label.clone()}</dt>
                                        <dd>{row.value.clone()}</dd>
                                    }
                                })
                                .collect_view()}
                        </dl>
                    }
                })}
            {project
                .full_content
                .clone()
                .map(|body| {
                    body.lines()
                        .filter(|line| !line.trim().is_empty())
                        .map(|line| view! { <p>{line.to_string()}</p> })
                        .collect_view()
                })}
            <div class="project-gallery">
                {project
                    .images
                    .iter()
                    .map(|src| view! { <img src=src.clone() alt="" loading="lazy" /> })
                    .collect_view()}
            </div>
            {video_bottom}
            <footer class="project-links">{links} {related}</footer>
        </article>
    }
    .into_view()
}
