use crate::Result;

use tombstone_core::Error;
use tombstone_sql::Flavor;
use url::Url;

/// Picks the driver for a connection URL.
#[cfg(feature = "sqlite")]
pub(super) fn driver(url: &str) -> Result<tombstone_driver_sqlite::Sqlite> {
    match parse(url)?.scheme() {
        "sqlite" => tombstone_driver_sqlite::Sqlite::new(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(not(feature = "sqlite"))]
pub(super) fn driver(url: &str) -> Result<NoDriver> {
    parse(url)?;
    Err(Error::invalid_connection_url(format!(
        "`sqlite` feature not enabled; url={url}"
    )))
}

/// Placeholder driver type when no driver feature is enabled.
#[cfg(not(feature = "sqlite"))]
#[derive(Debug)]
pub(super) enum NoDriver {}

#[cfg(not(feature = "sqlite"))]
#[tombstone_core::async_trait]
impl tombstone_core::Driver for NoDriver {
    fn url(&self) -> std::borrow::Cow<'_, str> {
        match *self {}
    }

    async fn connect(&self) -> Result<Box<dyn tombstone_core::Connection>> {
        match *self {}
    }
}

/// SQL flavor spoken by the database behind `url`.
pub(super) fn flavor(url: &str) -> Result<Flavor> {
    match parse(url)?.scheme() {
        "sqlite" => Ok(Flavor::Sqlite),
        "postgres" | "postgresql" => Ok(Flavor::Postgresql),
        "mysql" => Ok(Flavor::Mysql),
        scheme => Err(Error::invalid_connection_url(format!(
            "cannot infer SQL flavor; scheme={scheme}; url={url}"
        ))),
    }
}

fn parse(url: &str) -> Result<Url> {
    Url::parse(url)
        .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))
}
