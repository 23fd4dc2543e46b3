//! UI Components
//!
//! The settings sidebar and the article body it styles, plus the stateless
//! input widgets the sidebar is composed from.

pub mod article;
pub mod params_form;
pub mod widgets;

pub use article::Article;
pub use params_form::ArticleParamsForm;
