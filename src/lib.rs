mod classifier;
mod config;
mod dom;
mod environment;
mod error;
mod helpers;
mod os_helpers;
mod page;
mod resolver;
mod selector;
mod smart_download;
mod types;

pub use classifier::PlatformClassifier;
pub use config::{AttributeNames, FallbackPolicy, ResolverConfig};
pub use dom::{Descendants, Document, Element, NodeId};
pub use environment::EnvironmentProvider;
pub use error::{Error, Result};
pub use helpers::sanitize_url;
pub use page::{ClickEvent, ClickObserver, Navigator, Page, MIDDLE_BUTTON};
pub use resolver::TargetResolver;
pub use selector::TargetSelector;
pub use smart_download::SmartDownload;
pub use types::*;
