// ABOUTME: Wire messages of the server control service

//! Control service messages.

/// Server identification, reported at connect time and used as the health
/// probe target.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ServerInfoReply {
    /// Server version as a semantic version string.
    #[prost(string, tag = "1")]
    pub version: String,
    #[prost(string, tag = "2")]
    pub build_info: String,
}
