//! The `juststream-api` crate defines the data types shared by `juststream-catalog` and
//! `juststream-site`.
//!
//! The crate follows these conventions:
//! - Each content endpoint served by the catalog defines a full namespace path.
//! - For each endpoint namespace, `juststream-api` defines a nested namespace with the
//!   method of the endpoint.
//! - Inside the namespace for a given endpoint, the following types are defined:
//!   - A `Query` type with the parameters the caller sends.
//!   - A `Response` type with what the endpoint returns.
//!
//! The catalog is served in-process, there is no HTTP transport. The supported endpoints are:
//!  - `GET` `content`. Returns one page of the full catalog.
//!  - `GET` `content/category`. Returns one page of the catalog filtered by genre.
//!  - `GET` `content/id`. Returns a single catalog entry, if present.

mod types;

pub use types::{Category, ContentItem, ContentResponse, ContentType};

pub mod api {
    pub mod content {
        pub mod get {
            pub use crate::types::{ContentItem, ContentResponse, ContentType};

            /// The query of a `GET` `content` request
            #[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
            pub struct Query {
                /// 1-based page number
                pub page: u32,
            }

            impl Default for Query {
                fn default() -> Self {
                    Self { page: 1 }
                }
            }

            /// The response to the `GET` `content` request
            pub type Response = ContentResponse;
        }

        pub mod category {
            pub mod get {
                pub use crate::types::{Category, ContentItem, ContentResponse};

                /// The query of a `GET` `content/category` request
                #[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
                pub struct Query {
                    /// Genre that every returned item must contain
                    pub category: String,
                    /// 1-based page number within the filtered catalog
                    pub page: u32,
                }

                /// The response to the `GET` `content/category` request. `total` counts the
                /// filtered catalog.
                pub type Response = ContentResponse;
            }
        }

        pub mod id {
            pub mod get {
                pub use crate::types::ContentItem;

                /// The query of a `GET` `content/id` request
                #[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
                pub struct Query {
                    pub id: String,
                }

                /// The response to the `GET` `content/id` request
                #[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Clone)]
                pub struct Response {
                    pub item: Option<ContentItem>,
                }
            }
        }
    }
}
