pub mod edit;
pub mod export;
pub mod init;
pub mod plot;
pub mod rm;
pub mod root;
pub mod spend;
pub mod stats;
pub mod sum;
pub mod view;
pub mod work;
