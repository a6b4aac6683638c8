use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use filepeek_core::{MAX_CONTENT_HEIGHT, PreviewConfig};
use filepeek_fetch::{FetchError, Fetcher, HttpFetcher};

use super::*;

/// How the mock answers every request.
#[derive(Clone)]
enum Reply {
    Text(&'static str),
    Fail,
    Panic,
    Hang,
}

/// Fetcher that records requested paths and answers with a canned reply.
struct MockFetcher {
    reply: Reply,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(path.to_string());
        match self.reply.clone() {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Fail => Err(FetchError::Status {
                url: format!("http://test{path}"),
                status: 503,
            }),
            Reply::Panic => panic!("fetcher blew up on {path}"),
            Reply::Hang => std::future::pending().await,
        }
    }
}

impl App {
    /// Wait for the in-flight fetch, if any, and apply its outcome.
    async fn wait_for_fetch(&mut self) {
        let outcome = match &mut self.fetch_rx {
            Some(rx) => rx.recv().await,
            None => return,
        };
        self.handle_fetch_outcome(outcome);
    }
}

fn app_with(fetcher: Arc<MockFetcher>) -> App {
    App::new(&PreviewConfig::default(), fetcher)
}

fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    Widget::render(app, area, &mut buf);

    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[tokio::test]
async fn test_trigger_without_selection_does_nothing() {
    let fetcher = MockFetcher::new(Reply::Text("unused"));
    let mut app = app_with(fetcher.clone());

    assert!(!app.preview().can_trigger());
    app.handle_action(KeyAction::Preview);
    app.focus = Focus::Button;
    app.handle_action(KeyAction::Activate);

    assert!(!app.preview().is_loading());
    assert!(app.preview().content().is_empty());
    assert!(app.fetch_rx.is_none());
    assert!(fetcher.requests().is_empty());
}

#[tokio::test]
async fn test_select_and_preview_fetches_once() {
    let fetcher = MockFetcher::new(Reply::Text("payload"));
    let mut app = app_with(fetcher.clone());

    app.handle_action(KeyAction::SelectIndex(1));
    assert_eq!(app.preview().selected(), Some("api-sample"));
    // Selecting alone does not fetch.
    assert!(app.fetch_rx.is_none());

    app.handle_action(KeyAction::Preview);
    // Pressing again while loading is ignored.
    app.handle_action(KeyAction::Preview);
    app.wait_for_fetch().await;

    assert_eq!(fetcher.requests(), vec!["/files/Web-2.txt".to_string()]);
}

#[tokio::test]
async fn test_successful_fetch_sets_content() {
    let mut app = app_with(MockFetcher::new(Reply::Text("hello world")));

    app.handle_action(KeyAction::SelectIndex(0));
    app.handle_action(KeyAction::Preview);
    assert!(app.preview().is_loading());
    app.wait_for_fetch().await;

    assert_eq!(app.preview().content(), "hello world");
    assert!(!app.preview().is_loading());
}

#[tokio::test]
async fn test_failed_fetch_sets_error_content() {
    let mut app = app_with(MockFetcher::new(Reply::Fail));

    app.handle_action(KeyAction::SelectIndex(2));
    app.handle_action(KeyAction::Preview);
    app.wait_for_fetch().await;

    assert_eq!(app.preview().content(), "Error loading file content");
    assert!(!app.preview().is_loading());

    // Retry is allowed after a failure.
    assert!(app.preview().can_trigger());
}

#[tokio::test]
async fn test_unreachable_server_sets_error_content() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let config = PreviewConfig::new(format!("http://{addr}"));
    let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(&config).unwrap());
    let mut app = App::new(&config, fetcher);

    app.handle_action(KeyAction::SelectIndex(0));
    app.handle_action(KeyAction::Preview);
    app.wait_for_fetch().await;

    assert_eq!(app.preview().content(), "Error loading file content");
    assert!(!app.preview().is_loading());
    assert!(render_to_string(&app, 80, 20).contains("Error loading file content"));
}

#[tokio::test]
async fn test_panicking_fetcher_sets_error_content() {
    let mut app = app_with(MockFetcher::new(Reply::Panic));

    app.handle_action(KeyAction::SelectIndex(1));
    app.handle_action(KeyAction::Preview);
    app.wait_for_fetch().await;

    assert_eq!(app.preview().content(), "Error loading file content");
    assert!(!app.preview().is_loading());
    assert!(app.preview().can_trigger());
}

#[tokio::test]
async fn test_oversized_content_height_renders() {
    let text: String = (1..=70_000).map(|i| format!("row {i}\n")).collect();
    let text: &'static str = Box::leak(text.into_boxed_str());
    let config = PreviewConfig {
        content_height: u16::MAX,
        ..PreviewConfig::default()
    };
    let fetcher: Arc<dyn Fetcher> = MockFetcher::new(Reply::Text(text));
    let mut app = App::new(&config, fetcher);
    assert_eq!(app.content_height, MAX_CONTENT_HEIGHT);

    app.handle_action(KeyAction::SelectIndex(0));
    app.handle_action(KeyAction::Preview);
    app.wait_for_fetch().await;

    assert_eq!(app.preview().content().lines().count(), 70_000);
    let screen = render_to_string(&app, 80, 40);
    assert_eq!(screen.lines().count(), 40);
}

#[tokio::test]
async fn test_button_label_while_loading() {
    let mut app = app_with(MockFetcher::new(Reply::Hang));

    let idle = render_to_string(&app, 80, 20);
    assert!(idle.contains("Preview"));
    assert!(idle.contains("Select a file"));

    app.handle_action(KeyAction::SelectIndex(0));
    app.handle_action(KeyAction::Preview);

    assert!(app.preview().is_loading());
    assert!(!app.preview().can_trigger());
    let loading = render_to_string(&app, 80, 20);
    assert!(loading.contains("Loading..."));
    assert!(!loading.contains("Preview"));
}

#[tokio::test]
async fn test_content_persists_across_selection_change() {
    let mut app = app_with(MockFetcher::new(Reply::Text("first file")));

    app.handle_action(KeyAction::SelectIndex(0));
    app.handle_action(KeyAction::Preview);
    app.wait_for_fetch().await;
    assert_eq!(app.preview().content(), "first file");

    app.handle_action(KeyAction::SelectIndex(2));
    assert_eq!(app.preview().selected(), Some("sql-schema"));
    assert_eq!(app.preview().content(), "first file");
}

#[tokio::test]
async fn test_selector_shows_selected_name() {
    let mut app = app_with(MockFetcher::new(Reply::Text("")));
    let catalog = Catalog::default();

    for (index, file) in catalog.iter().enumerate() {
        app.handle_action(KeyAction::SelectIndex(index));
        assert_eq!(app.preview().selector_label(&catalog), file.name);
        assert!(render_to_string(&app, 80, 20).contains(file.name));
    }
}

#[tokio::test]
async fn test_dropdown_selection_flow() {
    let mut app = app_with(MockFetcher::new(Reply::Text("")));

    app.handle_action(KeyAction::Activate);
    assert_eq!(app.mode(), AppMode::Selecting);

    app.handle_action(KeyAction::MoveDown);
    app.handle_action(KeyAction::MoveDown);
    app.handle_action(KeyAction::Activate);

    assert_eq!(app.mode(), AppMode::Normal);
    assert_eq!(app.preview().selected(), Some("sql-schema"));
}

#[tokio::test]
async fn test_dropdown_escape_keeps_selection() {
    let mut app = app_with(MockFetcher::new(Reply::Text("")));
    app.handle_action(KeyAction::SelectIndex(0));

    app.handle_action(KeyAction::Activate);
    app.handle_action(KeyAction::MoveDown);
    app.handle_action(KeyAction::Cancel);

    assert_eq!(app.mode(), AppMode::Normal);
    assert_eq!(app.preview().selected(), Some("project-logic"));
}

#[tokio::test]
async fn test_out_of_range_index_is_ignored() {
    let mut app = app_with(MockFetcher::new(Reply::Text("")));
    app.handle_action(KeyAction::SelectIndex(7));
    assert!(app.preview().selected().is_none());
}

#[tokio::test]
async fn test_quit_cancels_pending_fetch() {
    let mut app = app_with(MockFetcher::new(Reply::Text("before")));
    app.handle_action(KeyAction::SelectIndex(0));
    app.handle_action(KeyAction::Preview);
    app.wait_for_fetch().await;

    let hang: Arc<dyn Fetcher> = MockFetcher::new(Reply::Hang);
    app.fetcher = hang;
    app.handle_action(KeyAction::Preview);
    assert!(app.preview().is_loading());

    app.handle_action(KeyAction::Quit);
    assert_eq!(app.mode(), AppMode::Quit);

    // The cancelled task drops its sender without delivering anything.
    app.wait_for_fetch().await;
    assert_eq!(app.preview().content(), "before");
    assert!(!app.preview().is_loading());
}

#[tokio::test]
async fn test_content_is_rendered_verbatim() {
    let mut app = app_with(MockFetcher::new(Reply::Text("line one\n  indented\tx")));
    app.handle_action(KeyAction::SelectIndex(0));
    app.handle_action(KeyAction::Preview);
    app.wait_for_fetch().await;

    let screen = render_to_string(&app, 80, 20);
    assert!(screen.contains("line one"));
    assert!(screen.contains("  indented  x"));
}

#[tokio::test]
async fn test_long_content_scrolls() {
    let text: String = (1..=60).map(|i| format!("row {i}\n")).collect();
    let text: &'static str = Box::leak(text.into_boxed_str());
    let mut app = app_with(MockFetcher::new(Reply::Text(text)));

    app.handle_action(KeyAction::SelectIndex(0));
    app.handle_action(KeyAction::Preview);
    app.wait_for_fetch().await;

    let screen = render_to_string(&app, 80, 40);
    assert!(screen.contains("row 1 "));
    assert!(!screen.contains("row 60"));

    app.focus = Focus::Content;
    app.handle_action(KeyAction::JumpToBottom);
    let screen = render_to_string(&app, 80, 40);
    assert!(screen.contains("row 60"));
}

#[tokio::test]
async fn test_help_overlay_toggle() {
    let mut app = app_with(MockFetcher::new(Reply::Text("")));
    app.handle_action(KeyAction::ToggleHelp);
    assert_eq!(app.mode(), AppMode::Help);
    assert!(render_to_string(&app, 80, 30).contains("Help"));

    app.handle_action(KeyAction::Cancel);
    assert_eq!(app.mode(), AppMode::Normal);
}

#[tokio::test]
async fn test_theme_toggle_persists_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    let mut app = app_with(MockFetcher::new(Reply::Text("")))
        .with_settings(UserSettings::default(), Some(path.clone()));
    app.handle_action(KeyAction::ToggleTheme);

    let saved = UserSettings::load_from(&path);
    assert_eq!(saved.theme, ThemeVariant::Light);
}
