use iced::keyboard;
use iced::widget::{
    button, column, container, horizontal_space, image, row, scrollable, stack, text,
};
use iced::{Alignment, Element, Length, Rectangle, Subscription, Task, Theme};
use rfd::FileDialog;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod content;
mod state;
mod ui;

use content::loader;
use content::model::{AboutDoc, CommonDoc, ContactDoc, DemosDoc, HeroDoc};
use content::{ContentError, SiteContent};
use state::gallery::GalleryState;
use state::modal::{self, ModalState, Phase};
use state::reveal::{RevealState, Section};

/// Upper bound on one animation step, so a stale tick after an idle
/// stretch cannot jump the animations to their end state.
const MAX_TICK_SECONDS: f32 = 0.1;

/// Main application state
struct Showreel {
    /// Where the five content documents live
    content_dir: PathBuf,
    /// The loaded documents; `None` renders placeholder markup
    content: SiteContent,
    /// Demo gallery filter, created once `demos.json` arrives
    gallery: Option<GalleryState>,
    /// The modal viewer overlay
    modal: ModalState,
    /// One-shot scroll reveal per section
    reveal: RevealState,
    /// Fetched artwork, keyed by where it is shown
    artwork: Artwork,
    /// Status message to display to the user
    status: String,
    /// Previous animation tick, for frame deltas
    last_tick: Option<Instant>,
}

/// Artwork handles the documents referenced, filled in as fetches land.
#[derive(Default)]
struct Artwork {
    hero: Option<image::Handle>,
    about: Option<image::Handle>,
    thumbnails: HashMap<usize, image::Handle>,
}

/// Where a fetched piece of artwork belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArtworkSlot {
    HeroPortrait,
    AboutPortrait,
    Thumbnail(usize),
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// One content loader finished, successfully or not
    CommonLoaded(Result<CommonDoc, ContentError>),
    HeroLoaded(Result<HeroDoc, ContentError>),
    DemosLoaded(Result<DemosDoc, ContentError>),
    AboutLoaded(Result<AboutDoc, ContentError>),
    ContactLoaded(Result<ContactDoc, ContentError>),
    /// One artwork fetch finished
    ArtworkLoaded(ArtworkSlot, Result<image::Handle, ContentError>),
    /// User clicked a category chip
    CategorySelected(String),
    /// User clicked the play control of a demo card
    PlayDemo(usize),
    TogglePlayback,
    /// The modal's explicit close control
    CloseModal,
    /// Click on the modal backdrop (not the content panel)
    BackdropPressed,
    /// Click on the content panel, swallowed so it cannot close the modal
    ModalPanelPressed,
    EscapePressed,
    /// The short delay before the modal's reveal animation elapsed
    ModalRevealElapsed,
    /// The close animation window elapsed
    ModalCloseElapsed,
    AnimationTick(Instant),
    Scrolled(scrollable::Viewport),
    /// Visible-bounds probe result for one section
    SectionProbed(Section, Option<Rectangle>),
    ProbeSections,
    /// A nav link, call-to-action, or contact channel was activated
    LinkActivated(String),
    /// User clicked the "Content folder…" button
    PickContentFolder,
}

impl Showreel {
    /// Create a new instance of the application and kick off the five
    /// independent content loaders.
    fn new() -> (Self, Task<Message>) {
        let app = Showreel {
            content_dir: PathBuf::from("data"),
            content: SiteContent::default(),
            gallery: None,
            modal: ModalState::new(),
            reveal: RevealState::new(),
            artwork: Artwork::default(),
            status: "Loading content…".to_string(),
            last_tick: None,
        };

        println!(
            "🎨 Showreel starting; content from {}",
            app.content_dir.display()
        );

        let boot = Task::batch([
            app.load_all(),
            // First probe after initial layout, so sections above the
            // fold reveal without any scrolling
            Task::perform(
                tokio::time::sleep(Duration::from_millis(120)),
                |_| Message::ProbeSections,
            ),
        ]);

        (app, boot)
    }

    /// Launch all five loaders. No ordering dependency; each one fails
    /// independently and only ever touches its own section.
    fn load_all(&self) -> Task<Message> {
        let dir = &self.content_dir;
        Task::batch([
            Task::perform(
                loader::load_document::<CommonDoc>(dir.clone(), "common"),
                Message::CommonLoaded,
            ),
            Task::perform(
                loader::load_document::<HeroDoc>(dir.clone(), "hero"),
                Message::HeroLoaded,
            ),
            Task::perform(
                loader::load_document::<DemosDoc>(dir.clone(), "demos"),
                Message::DemosLoaded,
            ),
            Task::perform(
                loader::load_document::<AboutDoc>(dir.clone(), "about"),
                Message::AboutLoaded,
            ),
            Task::perform(
                loader::load_document::<ContactDoc>(dir.clone(), "contact"),
                Message::ContactLoaded,
            ),
        ])
    }

    fn fetch_artwork(&self, slot: ArtworkSlot, source: &str) -> Task<Message> {
        if source.is_empty() {
            return Task::none();
        }
        Task::perform(
            loader::load_artwork(self.content_dir.clone(), source.to_string()),
            move |result| Message::ArtworkLoaded(slot, result),
        )
    }

    /// A loader failed: keep the placeholder markup, log, move on.
    fn record_failure(&mut self, error: ContentError) {
        self.status = format!("⚠️  {error}");
    }

    /// Probe every not-yet-revealed section's on-screen bounds.
    fn probe_sections(&self) -> Task<Message> {
        Task::batch(
            self.reveal
                .pending()
                .map(|section| {
                    container::visible_bounds(container::Id::new(section.id_str()))
                        .map(move |bounds| Message::SectionProbed(section, bounds))
                })
                .collect::<Vec<_>>(),
        )
    }

    /// Start closing the modal and schedule the teardown one-shot. Safe
    /// to call from any close trigger in any phase.
    fn close_modal(&mut self) -> Task<Message> {
        if !self.modal.is_mounted() || self.modal.phase() == Phase::Closing {
            return Task::none();
        }

        self.modal.close();
        Task::perform(tokio::time::sleep(modal::CLOSE_DELAY), |_| {
            Message::ModalCloseElapsed
        })
    }

    fn is_animating(&self) -> bool {
        self.modal.is_animating() || self.reveal.is_animating()
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CommonLoaded(result) => {
                match result {
                    Ok(doc) => {
                        self.status = "✅ Loaded common".to_string();
                        self.content.common = Some(doc);
                    }
                    Err(e) => self.record_failure(e),
                }
                Task::none()
            }
            Message::HeroLoaded(result) => match result {
                Ok(doc) => {
                    self.status = "✅ Loaded hero".to_string();
                    let artwork = self.fetch_artwork(ArtworkSlot::HeroPortrait, &doc.profile_image);
                    self.content.hero = Some(doc);
                    artwork
                }
                Err(e) => {
                    self.record_failure(e);
                    Task::none()
                }
            },
            Message::DemosLoaded(result) => match result {
                Ok(doc) => {
                    println!("🖼️  Loaded {} demo items", doc.items.len());
                    self.status = "✅ Loaded demos".to_string();
                    self.gallery = Some(GalleryState::new(&doc));

                    let thumbnails = Task::batch(
                        doc.items
                            .iter()
                            .enumerate()
                            .map(|(index, item)| {
                                self.fetch_artwork(ArtworkSlot::Thumbnail(index), &item.thumbnail)
                            })
                            .collect::<Vec<_>>(),
                    );
                    self.content.demos = Some(doc);
                    thumbnails
                }
                Err(e) => {
                    self.record_failure(e);
                    Task::none()
                }
            },
            Message::AboutLoaded(result) => match result {
                Ok(doc) => {
                    self.status = "✅ Loaded about".to_string();
                    let artwork = self.fetch_artwork(ArtworkSlot::AboutPortrait, &doc.image);
                    self.content.about = Some(doc);
                    artwork
                }
                Err(e) => {
                    self.record_failure(e);
                    Task::none()
                }
            },
            Message::ContactLoaded(result) => {
                match result {
                    Ok(doc) => {
                        self.status = "✅ Loaded contact".to_string();
                        self.content.contact = Some(doc);
                    }
                    Err(e) => self.record_failure(e),
                }
                Task::none()
            }
            Message::ArtworkLoaded(slot, result) => {
                match result {
                    Ok(handle) => match slot {
                        ArtworkSlot::HeroPortrait => self.artwork.hero = Some(handle),
                        ArtworkSlot::AboutPortrait => self.artwork.about = Some(handle),
                        ArtworkSlot::Thumbnail(index) => {
                            self.artwork.thumbnails.insert(index, handle);
                        }
                    },
                    // Logged by the loader; the placeholder frame stays
                    Err(_) => {}
                }
                Task::none()
            }
            Message::CategorySelected(name) => {
                if let Some(gallery) = &mut self.gallery {
                    gallery.select(name);
                }
                Task::none()
            }
            Message::PlayDemo(index) => {
                let Some(item) = self.gallery.as_ref().and_then(|g| g.item(index)) else {
                    return Task::none();
                };
                if item.embed_url.is_empty() {
                    return Task::none();
                }

                let (embed_url, kind, title) =
                    (item.embed_url.clone(), item.kind, item.title.clone());
                println!("🎬 Opening demo: {title}");
                self.modal.open(embed_url, kind);

                // The reveal waits one beat so the first frame renders
                // the hidden state, then the animation starts from it
                Task::perform(tokio::time::sleep(modal::OPEN_DELAY), |_| {
                    Message::ModalRevealElapsed
                })
            }
            Message::TogglePlayback => {
                self.modal.toggle_playback();
                Task::none()
            }
            Message::CloseModal | Message::BackdropPressed => self.close_modal(),
            Message::EscapePressed => self.close_modal(),
            Message::ModalPanelPressed => Task::none(),
            Message::ModalRevealElapsed => {
                self.modal.reveal();
                Task::none()
            }
            Message::ModalCloseElapsed => {
                self.modal.finish_close();
                Task::none()
            }
            Message::AnimationTick(now) => {
                let dt = self
                    .last_tick
                    .map(|last| now.duration_since(last).as_secs_f32())
                    .unwrap_or(0.0)
                    .min(MAX_TICK_SECONDS);
                self.last_tick = if self.is_animating() {
                    Some(now)
                } else {
                    None
                };

                self.modal.tick(dt);
                self.reveal.tick(dt);
                Task::none()
            }
            Message::Scrolled(_viewport) => self.probe_sections(),
            Message::ProbeSections => self.probe_sections(),
            Message::SectionProbed(section, bounds) => {
                self.reveal.observe(section, bounds);
                Task::none()
            }
            Message::LinkActivated(href) => {
                if href.is_empty() {
                    return Task::none();
                }

                if let Some(section) = Section::from_anchor(&href) {
                    return Task::batch([
                        scrollable::scroll_to(
                            scroll_id(),
                            scrollable::AbsoluteOffset {
                                x: 0.0,
                                y: section.scroll_offset(),
                            },
                        ),
                        // Probe once the scroll has settled
                        Task::perform(
                            tokio::time::sleep(Duration::from_millis(80)),
                            |_| Message::ProbeSections,
                        ),
                    ]);
                }

                // No location bar in a window: external targets go to the
                // clipboard instead
                self.status = format!("📋 Copied {href} to the clipboard");
                iced::clipboard::write(href)
            }
            Message::PickContentFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Content Folder")
                    .pick_folder();

                if let Some(dir) = folder {
                    println!("📁 Content folder: {}", dir.display());
                    self.content_dir = dir;
                    self.content = SiteContent::default();
                    self.gallery = None;
                    self.artwork = Artwork::default();
                    self.status =
                        format!("Loading content from {}…", self.content_dir.display());
                    return self.load_all();
                }

                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = column![
            ui::nav::view(self.content.common.as_ref()),
            ui::hero::view(
                self.content.hero.as_ref(),
                self.artwork.hero.as_ref(),
                self.reveal.progress(Section::Hero),
            ),
            ui::gallery::view(
                self.content.demos.as_ref(),
                self.gallery.as_ref(),
                &self.artwork.thumbnails,
                self.reveal.progress(Section::Demos),
            ),
            ui::about::view(
                self.content.about.as_ref(),
                self.artwork.about.as_ref(),
                self.reveal.progress(Section::About),
            ),
            ui::contact::view(
                self.content.contact.as_ref(),
                self.reveal.progress(Section::Contact),
            ),
            self.footer(),
        ];

        let page = scrollable(page)
            .id(scroll_id())
            .on_scroll(Message::Scrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        if self.modal.is_mounted() {
            stack![page, ui::modal::view(&self.modal)].into()
        } else {
            page.into()
        }
    }

    fn footer(&self) -> Element<Message> {
        let line = self
            .content
            .common
            .as_ref()
            .map(|c| c.footer.as_str())
            .unwrap_or("");

        let body = column![
            text(line).size(14),
            row![
                text(self.status.as_str()).size(13),
                horizontal_space(),
                button(text("Content folder…").size(13))
                    .style(ui::style::ghost)
                    .padding([6.0, 10.0])
                    .on_press(Message::PickContentFolder),
            ]
            .align_y(Alignment::Center),
        ]
        .spacing(12.0);

        container(body)
            .width(Length::Fill)
            .padding([24.0, 32.0])
            .style(ui::style::footer)
            .into()
    }

    /// Window title: the site title once `common.json` has loaded.
    fn title(&self) -> String {
        match self.content.common.as_ref() {
            Some(common) if !common.site_title.is_empty() => common.site_title.clone(),
            _ => "Showreel".to_string(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![keyboard::on_key_press(handle_key_press)];

        // Drive animations only while something is actually moving
        if self.is_animating() {
            subscriptions.push(
                iced::time::every(Duration::from_millis(16)).map(Message::AnimationTick),
            );
        }

        Subscription::batch(subscriptions)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn scroll_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

fn handle_key_press(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::EscapePressed),
        _ => None,
    }
}

fn main() -> iced::Result {
    iced::application(Showreel::title, Showreel::update, Showreel::view)
        .subscription(Showreel::subscription)
        .theme(Showreel::theme)
        .window_size((1180.0, 860.0))
        .centered()
        .run_with(Showreel::new)
}
