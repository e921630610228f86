pub mod ai_creation;
pub mod dashboard;
pub mod download;
pub mod editor;
pub mod upload;

pub use ai_creation::AiCreationScreen;
pub use dashboard::Dashboard;
pub use download::DownloadScreen;
pub use editor::Editor;
pub use upload::UploadScreen;
