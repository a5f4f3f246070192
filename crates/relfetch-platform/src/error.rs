use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "you are running on an ARM system ({machine}); installer binaries are only available for x86 systems, you will have to build from source"
    )]
    UnsupportedPlatform { machine: String },
}
