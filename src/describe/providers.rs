//! Process-wide registry of custom description providers.

use std::any::Any;

use once_cell::sync::OnceCell;
use thiserror::Error;

/// An extension point for the [`describe`](crate::describe) function.
///
/// A provider inspects a value through `&dyn Any` and either returns a
/// formatted string for it or declines by returning `None`, in which case
/// the remaining providers and then the default rules are tried.
///
/// # Example
///
/// ```rust,ignore
/// use std::any::Any;
/// use attest::{install_description_providers, ValueDescription};
///
/// struct Celsius(f64);
///
/// struct CelsiusDescription;
///
/// impl ValueDescription for CelsiusDescription {
///     fn try_describe(&self, value: &dyn Any) -> Option<String> {
///         value.downcast_ref::<Celsius>().map(|c| format!("{}°C", c.0))
///     }
/// }
///
/// install_description_providers(vec![Box::new(CelsiusDescription)]).unwrap();
/// ```
pub trait ValueDescription: Send + Sync {
    /// Describe `value`, or return `None` to decline so that other providers
    /// and the default rules are tried.
    fn try_describe(&self, value: &dyn Any) -> Option<String>;
}

static PROVIDERS: OnceCell<Vec<Box<dyn ValueDescription>>> = OnceCell::new();

/// The description provider registry has already been installed.
#[derive(Debug, Error)]
#[error("description providers are already installed for this process")]
pub struct DescriptionProvidersInstalled;

/// Install the process-wide list of description providers.
///
/// Providers are tried in list order before the default formatting rules,
/// on every [`describe`](crate::describe) call. Installation happens at most
/// once per process, typically at startup; the registry is immutable
/// afterwards and safe for concurrent reads.
pub fn install_description_providers(
    providers: Vec<Box<dyn ValueDescription>>,
) -> Result<(), DescriptionProvidersInstalled> {
    PROVIDERS
        .set(providers)
        .map_err(|_| DescriptionProvidersInstalled)
}

/// Offer `value` to the installed providers, first claimant wins.
pub(crate) fn try_describe(value: &dyn Any) -> Option<String> {
    PROVIDERS
        .get()?
        .iter()
        .find_map(|provider| provider.try_describe(value))
}
