use nova_types::{Identity, Project, ProjectStatus};

use crate::session::Session;

/// Screens of the signed-in app. Pages that work on a project carry it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Editor(Project),
    Download(Project),
    RepurposeUpload,
    AiCreation,
}

impl Page {
    /// Exported projects open their downloads, everything else the editor.
    pub fn for_project(project: Project) -> Self {
        match project.status {
            ProjectStatus::Exported => Page::Download(project),
            ProjectStatus::ReadyToReview | ProjectStatus::Processing => Page::Editor(project),
        }
    }

    pub fn project(&self) -> Option<&Project> {
        match self {
            Page::Editor(project) | Page::Download(project) => Some(project),
            Page::Dashboard | Page::RepurposeUpload | Page::AiCreation => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Editor(_) => "editor",
            Page::Download(_) => "download",
            Page::RepurposeUpload => "repurpose-upload",
            Page::AiCreation => "ai-creation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationState {
    page: Page,
}

impl NavigationState {
    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.page.project()
    }

    pub fn navigate(&mut self, page: Page) {
        dioxus_logger::tracing::debug!("navigate: {} -> {}", self.page.name(), page.name());
        self.page = page;
    }

    pub fn select_project(&mut self, project: Project) {
        self.navigate(Page::for_project(project));
    }

    pub fn reset(&mut self) {
        self.page = Page::Dashboard;
    }
}

/// What the shell renders at the top level.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Loading,
    AuthGate,
    Main { identity: Identity, page: Page },
}

/// Session plus navigation, owned by the shell and shared through context.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    session: Session,
    navigation: NavigationState,
}

impl AppState {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Apply a gateway notification. Navigation is discarded whenever the
    /// signed-in account goes away or changes, so a stale page never
    /// outlives the session that opened it.
    pub fn apply_session(&mut self, identity: Option<Identity>) {
        let next = Session::from_identity(identity);
        let same_account = match (self.session.identity(), next.identity()) {
            (Some(current), Some(incoming)) => current.uid == incoming.uid,
            _ => false,
        };

        if !same_account {
            self.navigation.reset();
        }

        match &next {
            Session::Authenticated(identity) if !same_account => {
                dioxus_logger::tracing::info!("Session authenticated: {}", identity.email);
            }
            Session::Anonymous if self.session != Session::Anonymous => {
                dioxus_logger::tracing::info!("Session signed out");
            }
            _ => {}
        }

        self.session = next;
    }

    /// Navigation requests only apply to a signed-in session.
    pub fn navigate(&mut self, page: Page) {
        if !self.session.is_authenticated() {
            dioxus_logger::tracing::warn!(
                "Ignoring navigation to {} without a session",
                page.name()
            );
            return;
        }
        self.navigation.navigate(page);
    }

    pub fn select_project(&mut self, project: Project) {
        self.navigate(Page::for_project(project));
    }

    pub fn view(&self) -> View {
        match &self.session {
            Session::Unknown => View::Loading,
            Session::Anonymous => View::AuthGate,
            Session::Authenticated(identity) => View::Main {
                identity: identity.clone(),
                page: self.navigation.page().clone(),
            },
        }
    }
}
