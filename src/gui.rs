use std::path::Path;

use eframe::egui;
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

use crate::board::DrawingBoard;
use crate::content::ContentStore;
use crate::settings::Settings;

#[derive(Debug, Clone, PartialEq, Eq)]
enum View {
    Home,
    Blog,
    Post(String),
}

/// Top-level portfolio application: home view with the drawing board, blog
/// list, and single-post view rendered from Markdown.
pub struct PortfolioApp {
    store: ContentStore,
    board: DrawingBoard,
    view: View,
    markdown_cache: CommonMarkCache,
}

impl PortfolioApp {
    pub fn new(settings: Settings) -> Self {
        let store = ContentStore::load(Path::new(&settings.content_dir));
        tracing::info!(posts = store.posts().len(), "content store loaded");
        Self {
            store,
            board: DrawingBoard::new(settings.board_config()),
            view: View::Home,
            markdown_cache: CommonMarkCache::default(),
        }
    }

    fn home_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("hi, I'm a pixel person");
        ui.label("I build small tools and write about them occasionally.");
        ui.horizontal(|ui| {
            ui.hyperlink_to("github", "https://github.com");
            ui.hyperlink_to("mastodon", "https://mastodon.social");
        });
        ui.separator();
        self.board.ui(ui);
    }

    fn blog_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("blog");
        if self.store.is_empty() {
            ui.weak("no posts yet");
            return;
        }
        let mut open = None;
        for post in self.store.posts() {
            ui.horizontal(|ui| {
                if ui.link(&post.title).clicked() {
                    open = Some(post.slug.clone());
                }
                if let Some(date) = post.date {
                    ui.weak(date.to_string());
                }
            });
        }
        if let Some(slug) = open {
            self.view = View::Post(slug);
        }
    }

    fn post_ui(&mut self, ui: &mut egui::Ui, slug: &str) {
        if ui.button("back").clicked() {
            self.view = View::Blog;
            return;
        }
        ui.separator();
        match self.store.get(slug) {
            Some(post) => {
                CommonMarkViewer::new(format!("post_{slug}")).show(
                    ui,
                    &mut self.markdown_cache,
                    &post.body,
                );
            }
            None => {
                ui.weak("post not found");
            }
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("pixelfolio").strong().monospace());
                ui.separator();
                if ui
                    .selectable_label(self.view == View::Home, "home")
                    .clicked()
                {
                    self.view = View::Home;
                }
                let in_blog = matches!(self.view, View::Blog | View::Post(_));
                if ui.selectable_label(in_blog, "blog").clicked() {
                    self.view = View::Blog;
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.view.clone() {
                View::Home => self.home_ui(ui),
                View::Blog => self.blog_ui(ui),
                View::Post(slug) => self.post_ui(ui, &slug),
            });
        });
    }
}
