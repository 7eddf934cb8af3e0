pub mod builder;
pub mod error;
pub mod frontmatter;
pub mod i18n;
pub mod merger;
pub mod model;
pub mod paths;
pub mod scanner;
pub mod store;
pub mod techstack;
