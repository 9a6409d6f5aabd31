// asset-domain library entry point
pub mod asset_record;
pub mod breakpoints;
pub mod error;
pub mod options;
pub mod upload;
pub use asset_record::{build_asset_record, AssetRecord, AssetRecordInput, NodeInternal};
pub use breakpoints::compute_breakpoints;
pub use error::AssetError;
pub use options::PluginOptions;
pub use upload::{UploadResult, ValidUpload};
