/*
 * Copyright 2025 Oxide Computer Company
 */

mod prelude {
    pub(crate) use crate::{projects, Central, MakeInternalError};
    pub use dropshot::{
        endpoint, HttpError, HttpResponseOk, RequestContext,
    };
    pub use hyper::header::{CONTENT_LENGTH, CONTENT_TYPE};
    pub use hyper::{Body, Response};
    pub use slog::{error, info, warn, Logger};
    pub use std::sync::Arc;

    pub type DSResult<T> = std::result::Result<T, HttpError>;
}

pub mod public;
