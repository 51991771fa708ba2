use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use casefile_core::time::fixed_now;
use services::{
    Clock, FeedbackAudio, GameService, IdentityProvider, LocalIdentity, SilentAudio, UserProfile,
    VocabularyService,
};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{CreateGameView, LoginView, MenuView, QuizView, SavedGamesView};

#[derive(Clone)]
struct TestApp {
    identity: Arc<LocalIdentity>,
    games: Arc<GameService>,
    vocabulary: Arc<VocabularyService>,
}

impl UiApp for TestApp {
    fn identity(&self) -> Arc<dyn IdentityProvider> {
        Arc::clone(&self.identity) as Arc<dyn IdentityProvider>
    }

    fn games(&self) -> Arc<GameService> {
        Arc::clone(&self.games)
    }

    fn vocabulary(&self) -> Arc<VocabularyService> {
        Arc::clone(&self.vocabulary)
    }

    fn audio(&self) -> Arc<dyn FeedbackAudio> {
        Arc::new(SilentAudio)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Menu,
    CreateGame,
    SavedGames,
    Quiz(i64),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Menu => rsx! { MenuView {} },
        ViewKind::CreateGame => rsx! { CreateGameView {} },
        ViewKind::SavedGames => rsx! { SavedGamesView {} },
        ViewKind::Quiz(game_id) => rsx! { QuizView { game_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub games: Arc<GameService>,
    pub identity: Arc<LocalIdentity>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::in_memory();
    let clock = Clock::fixed(fixed_now());
    let games = Arc::new(GameService::new(clock, storage.games.clone()));
    let identity = Arc::new(LocalIdentity::new(UserProfile::new("Mina Harker")));
    let vocabulary = Arc::new(VocabularyService::new(None));

    let app = Arc::new(TestApp {
        identity: Arc::clone(&identity),
        games: Arc::clone(&games),
        vocabulary,
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        storage,
        games,
        identity,
    }
}
