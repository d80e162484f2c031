use crate::core::data::colour::Colour;
use std::error::Error;

pub trait ColourMap<T> {
    type Failure: Error + Send + Sync + 'static;

    fn map(&self, value: &T) -> Result<Colour, Self::Failure>;

    fn display_name(&self) -> &str;
}
