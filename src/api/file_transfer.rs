// ABOUTME: Wire messages of the file transfer service

//! File transfer service messages.
//!
//! Uploads are client-streaming: one metadata message followed by content
//! chunks. Downloads are server-streaming with the same chunking.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UploadMeta {
    /// File name under which the content is stored in the server working
    /// directory.
    #[prost(string, tag = "1")]
    pub filename: String,
    #[prost(int64, tag = "2")]
    pub size: i64,
}

pub mod upload_request {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Step {
        #[prost(message, tag = "1")]
        Meta(super::UploadMeta),
        #[prost(bytes, tag = "2")]
        Chunk(Vec<u8>),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UploadRequest {
    #[prost(oneof = "upload_request::Step", tags = "1, 2")]
    pub step: Option<upload_request::Step>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UploadReply {
    /// Server-visible path of the uploaded file.
    #[prost(string, tag = "1")]
    pub remote_path: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DownloadRequest {
    #[prost(string, tag = "1")]
    pub remote_path: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DownloadMeta {
    #[prost(int64, tag = "1")]
    pub size: i64,
}

pub mod download_reply {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Step {
        #[prost(message, tag = "1")]
        Meta(super::DownloadMeta),
        #[prost(bytes, tag = "2")]
        Chunk(Vec<u8>),
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DownloadReply {
    #[prost(oneof = "download_reply::Step", tags = "1, 2")]
    pub step: Option<download_reply::Step>,
}
