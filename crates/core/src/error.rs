use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The choice list contains no selectable choice. Is every item disabled or a separator?")]
    NoSelectableChoice,
}
