// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request/response plumbing for the IPX800 gateway.
//!
//! The gateway exposes two HTTP sub-protocols on the same host and port:
//!
//! - the JSON API (`/api/xdevices.json`), authenticated by an API key sent
//!   as the `key` query parameter; a request is acknowledged when the answer
//!   carries `"status": "Success"`
//! - the legacy CGI API (`/user/api.cgi`), authenticated with HTTP basic
//!   credentials; a request is acknowledged when the plain-text answer
//!   contains `Success`
//!
//! [`Ipx800`] handles both, with per-attempt timeouts and bounded retries
//! governed by a [`RetryPolicy`].

mod http;
mod params;
mod response;
mod retry;

pub use http::{API_PATH, CGI_PATH, CGI_SUCCESS_MARKER, Credentials, Ipx800, Ipx800Config};
pub use params::{API_KEY_PARAM, RequestParams};
pub use response::{ApiResponse, STATUS_FIELD, SUCCESS_STATUS};
pub use retry::RetryPolicy;

pub(crate) use http::XPWM_ALL_CHANNELS;
