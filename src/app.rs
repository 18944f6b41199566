use std::io;

use chrono::{DateTime, Local};
use ratatui::widgets::ListState;
use tracing::{info, warn};

use crate::controller::{
    Resources, ResourcesController, Schedule, ScheduleController, Screen, ScreenController,
};
use crate::model::{group_by_course, Resource};
use crate::nav::{Navigator, Route};
use crate::state::{ScreenState, Subscription};

/// One data-backed screen: its controller, the view's read-only subscription,
/// and the list cursor.
pub struct ScreenView<S: Screen> {
    controller: ScreenController<S>,
    subscription: Subscription<S::Item>,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Wall-clock time of the last `Success` this view observed.
    pub last_updated: Option<DateTime<Local>>,
}

impl<S: Screen> ScreenView<S> {
    pub fn new(controller: ScreenController<S>) -> Self {
        let subscription = controller.subscribe();
        Self {
            controller,
            subscription,
            list_state: ListState::default(),
            last_updated: None,
        }
    }

    pub fn state(&self) -> &ScreenState<S::Item> {
        self.subscription.current()
    }

    /// State and list cursor borrowed together for rendering.
    pub fn render_parts(&mut self) -> (&ScreenState<S::Item>, &mut ListState) {
        (self.subscription.current(), &mut self.list_state)
    }

    /// Apply at most one pending transition, so every `Loading` gets at least
    /// one frame on screen.
    fn sync(&mut self) {
        if let Some(ScreenState::Success(_)) = self.subscription.try_next() {
            self.last_updated = Some(Local::now());
            self.list_state.select(None);
        }
    }

    /// Retry, but only out of the `Error` state.
    fn retry(&mut self) -> bool {
        if !self.state().is_error() {
            return false;
        }
        self.controller.retry();
        true
    }
}

/// One rendered line of the resources screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRow {
    Header(String),
    Entry(Resource),
}

/// Flatten grouped resources into headers followed by their entries.
pub fn resource_rows(resources: &[Resource]) -> Vec<ResourceRow> {
    group_by_course(resources)
        .into_iter()
        .flat_map(|(course, items)| {
            std::iter::once(ResourceRow::Header(course))
                .chain(items.into_iter().map(ResourceRow::Entry))
        })
        .collect()
}

/// Hands a resource URL to something outside the terminal.
pub type Launcher = Box<dyn Fn(&str) -> io::Result<()>>;

/// Opens URLs with the platform's default handler, without waiting for it.
fn system_launcher() -> Launcher {
    Box::new(|url: &str| open::that_detached(url))
}

pub struct App {
    pub nav: Navigator,
    /// Selection on the home menu.
    pub menu_state: ListState,
    pub schedule: ScreenView<Schedule>,
    pub resources: ScreenView<Resources>,
    /// Where the data comes from, shown in the status bar.
    pub source: String,
    /// Whether the user has requested to quit.
    pub quit: bool,
    launcher: Launcher,
}

impl App {
    pub fn new(
        schedule: ScheduleController,
        resources: ResourcesController,
        source: impl Into<String>,
    ) -> Self {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));
        Self {
            nav: Navigator::new(),
            menu_state,
            schedule: ScreenView::new(schedule),
            resources: ScreenView::new(resources),
            source: source.into(),
            quit: false,
            launcher: system_launcher(),
        }
    }

    /// Replace how resource links are opened.
    pub fn with_launcher(mut self, launcher: Launcher) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn route(&self) -> Route {
        self.nav.current()
    }

    /// Pull state transitions from both controllers.
    pub fn tick(&mut self) {
        self.schedule.sync();
        self.resources.sync();
    }

    // -- navigation ----------------------------------------------------------

    /// Act on the highlighted row: a home-menu entry opens its screen, a
    /// resource entry opens its link.
    pub fn open_selected(&mut self) {
        match self.route() {
            Route::Home => {
                if let Some(route) = self.menu_state.selected().and_then(|i| Route::MENU.get(i)) {
                    self.nav.push(*route);
                }
            }
            Route::Resources => {
                self.open_selected_resource();
            }
            Route::Schedule | Route::Map => {}
        }
    }

    /// The resource under the cursor.  `None` on a course header, with
    /// nothing selected, or while the screen is not showing data.
    pub fn selected_resource(&self) -> Option<Resource> {
        let ScreenState::Success(resources) = self.resources.state() else {
            return None;
        };
        let index = self.resources.list_state.selected()?;
        match resource_rows(resources).into_iter().nth(index)? {
            ResourceRow::Entry(resource) => Some(resource),
            ResourceRow::Header(_) => None,
        }
    }

    /// Launch the URL of the resource under the cursor.  Returns whether a
    /// launch was attempted.
    pub fn open_selected_resource(&mut self) -> bool {
        let Some(resource) = self.selected_resource() else {
            return false;
        };
        match (self.launcher)(&resource.url) {
            Ok(()) => info!(url = %resource.url, "opened resource"),
            Err(e) => warn!(url = %resource.url, error = %e, "could not open resource"),
        }
        true
    }

    /// Go back one screen.  Leaving the home screen quits.
    pub fn back(&mut self) {
        if !self.nav.back() {
            self.quit = true;
        }
    }

    /// Retry the visible screen's fetch if it is showing an error.
    pub fn retry(&mut self) -> bool {
        match self.route() {
            Route::Schedule => self.schedule.retry(),
            Route::Resources => self.resources.retry(),
            Route::Home | Route::Map => false,
        }
    }

    // -- selection -----------------------------------------------------------

    fn row_count(&self) -> usize {
        match self.route() {
            Route::Home => Route::MENU.len(),
            Route::Schedule => match self.schedule.state() {
                ScreenState::Success(courses) => courses.len(),
                _ => 0,
            },
            Route::Resources => match self.resources.state() {
                ScreenState::Success(resources) => resource_rows(resources).len(),
                _ => 0,
            },
            Route::Map => 0,
        }
    }

    fn list_state_mut(&mut self) -> Option<&mut ListState> {
        match self.route() {
            Route::Home => Some(&mut self.menu_state),
            Route::Schedule => Some(&mut self.schedule.list_state),
            Route::Resources => Some(&mut self.resources.list_state),
            Route::Map => None,
        }
    }

    fn select_with(&mut self, pick: impl FnOnce(Option<usize>, usize) -> usize) {
        let len = self.row_count();
        if len == 0 {
            return;
        }
        if let Some(state) = self.list_state_mut() {
            let next = pick(state.selected(), len);
            state.select(Some(next));
        }
    }

    pub fn select_next(&mut self) {
        self.select_with(|cur, len| cur.map_or(0, |i| (i + 1).min(len - 1)));
    }

    pub fn select_previous(&mut self) {
        self.select_with(|cur, _| cur.map_or(0, |i| i.saturating_sub(1)));
    }

    pub fn select_first(&mut self) {
        self.select_with(|_, _| 0);
    }

    pub fn select_last(&mut self) {
        self.select_with(|_, len| len - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::repository::Repository;
    use crate::testing::{course, intro_course, resource, StaticRepository};

    fn app_with(repo: StaticRepository) -> App {
        let repo: Arc<dyn Repository> = Arc::new(repo);
        App::new(
            ScheduleController::new(Arc::clone(&repo)),
            ResourcesController::new(repo),
            "test",
        )
    }

    /// Tick until neither screen is loading.
    async fn settle(app: &mut App) {
        for _ in 0..1000 {
            app.tick();
            if !app.schedule.state().is_loading() && !app.resources.state().is_loading() {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("screens never settled");
    }

    fn sample() -> StaticRepository {
        StaticRepository::ok(
            vec![intro_course(), course("MA201", "Calculus II", "Sara")],
            vec![
                resource("Course ID: 7", "Slides"),
                resource("Course ID: 3", "Notes"),
                resource("Course ID: 7", "Quiz"),
            ],
        )
    }

    #[tokio::test]
    async fn new_app_starts_at_home_with_first_entry_selected() {
        let app = app_with(sample());
        assert_eq!(app.route(), Route::Home);
        assert_eq!(app.menu_state.selected(), Some(0));
        assert!(!app.quit);
    }

    #[tokio::test]
    async fn tick_shows_loading_before_success() {
        let mut app = app_with(sample());
        assert!(app.schedule.state().is_loading());

        settle(&mut app).await;

        assert_eq!(
            app.schedule.state(),
            &ScreenState::Success(vec![intro_course(), course("MA201", "Calculus II", "Sara")])
        );
        assert!(app.schedule.last_updated.is_some());
    }

    #[tokio::test]
    async fn menu_opens_each_screen_and_back_returns_home() {
        let mut app = app_with(sample());

        app.open_selected();
        assert_eq!(app.route(), Route::Schedule);
        app.back();
        assert_eq!(app.route(), Route::Home);

        app.select_next();
        app.open_selected();
        assert_eq!(app.route(), Route::Resources);
        app.back();

        app.select_last();
        app.open_selected();
        assert_eq!(app.route(), Route::Map);
        app.back();
        assert!(!app.quit);
    }

    #[tokio::test]
    async fn back_from_home_quits() {
        let mut app = app_with(sample());
        app.back();
        assert!(app.quit);
    }

    #[tokio::test]
    async fn open_selected_only_works_on_home() {
        let mut app = app_with(sample());
        app.open_selected();
        app.open_selected();
        assert_eq!(app.route(), Route::Schedule);
    }

    /// Records every URL handed to the launcher instead of opening it.
    fn recording_launcher() -> (Launcher, Arc<Mutex<Vec<String>>>) {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&opened);
        let launcher: Launcher = Box::new(move |url: &str| {
            sink.lock().unwrap().push(url.to_string());
            Ok(())
        });
        (launcher, opened)
    }

    #[tokio::test]
    async fn enter_on_resource_entry_opens_its_url() {
        let (launcher, opened) = recording_launcher();
        let mut app = app_with(sample()).with_launcher(launcher);
        settle(&mut app).await;
        app.select_next();
        app.open_selected();
        assert_eq!(app.route(), Route::Resources);

        // Rows: [7] Slides Quiz [3] Notes
        app.resources.list_state.select(Some(2));
        assert_eq!(app.selected_resource(), Some(resource("Course ID: 7", "Quiz")));
        app.open_selected();

        app.resources.list_state.select(Some(4));
        app.open_selected();

        assert_eq!(
            *opened.lock().unwrap(),
            vec!["https://example.com/Quiz", "https://example.com/Notes"]
        );
        assert_eq!(app.route(), Route::Resources);
    }

    #[tokio::test]
    async fn enter_on_course_header_does_nothing() {
        let (launcher, opened) = recording_launcher();
        let mut app = app_with(sample()).with_launcher(launcher);
        settle(&mut app).await;
        app.select_next();
        app.open_selected();

        app.resources.list_state.select(Some(3));
        assert_eq!(app.selected_resource(), None);
        assert!(!app.open_selected_resource());

        app.resources.list_state.select(None);
        assert!(!app.open_selected_resource());
        assert!(opened.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_launch_is_not_fatal() {
        let failing: Launcher =
            Box::new(|_: &str| Err(io::Error::new(io::ErrorKind::NotFound, "no browser")));
        let mut app = app_with(sample()).with_launcher(failing);
        settle(&mut app).await;
        app.select_next();
        app.open_selected();

        app.resources.list_state.select(Some(1));
        assert!(app.open_selected_resource());
        assert!(!app.quit);
    }

    #[tokio::test]
    async fn retry_is_refused_unless_screen_shows_error() {
        let mut app = app_with(sample());
        settle(&mut app).await;

        assert!(!app.retry(), "home has nothing to retry");
        app.open_selected();
        assert!(!app.retry(), "schedule loaded fine");
    }

    #[tokio::test]
    async fn retry_from_error_goes_back_to_loading() {
        let mut app = app_with(StaticRepository {
            courses: Err("timeout"),
            resources: Ok(Vec::new()),
        });
        settle(&mut app).await;
        assert_eq!(
            app.schedule.state(),
            &ScreenState::Error("Failed to load schedule: timeout".into())
        );

        app.open_selected();
        assert!(app.retry());

        app.tick();
        assert!(app.schedule.state().is_loading());
        settle(&mut app).await;
        assert!(app.schedule.state().is_error());
    }

    #[tokio::test]
    async fn selection_clamps_to_visible_rows() {
        let mut app = app_with(sample());
        settle(&mut app).await;

        app.select_next();
        app.open_selected();
        assert_eq!(app.route(), Route::Resources);

        // Two groups + three entries.
        app.select_last();
        assert_eq!(app.resources.list_state.selected(), Some(4));
        app.select_next();
        assert_eq!(app.resources.list_state.selected(), Some(4));
        app.select_first();
        app.select_previous();
        assert_eq!(app.resources.list_state.selected(), Some(0));
    }

    #[tokio::test]
    async fn selection_on_loading_screen_is_noop() {
        let mut app = app_with(sample());
        app.open_selected();
        app.select_next();
        assert!(app.schedule.list_state.selected().is_none());
    }

    #[test]
    fn resource_rows_put_headers_before_entries() {
        let rows = resource_rows(&[
            resource("Course ID: 7", "a"),
            resource("Course ID: 3", "b"),
            resource("Course ID: 7", "c"),
        ]);

        assert_eq!(
            rows,
            vec![
                ResourceRow::Header("Course ID: 7".into()),
                ResourceRow::Entry(resource("Course ID: 7", "a")),
                ResourceRow::Entry(resource("Course ID: 7", "c")),
                ResourceRow::Header("Course ID: 3".into()),
                ResourceRow::Entry(resource("Course ID: 3", "b")),
            ]
        );
    }
}
