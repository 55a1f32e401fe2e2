pub mod deserializers;
pub mod front_matter;

pub use self::front_matter::FrontMatter;
