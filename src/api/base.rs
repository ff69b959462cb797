// ABOUTME: Shared base messages of the ACP gRPC API
// ABOUTME: Request envelopes and object info common to every resource service

//! Messages shared by every resource service.
//!
//! Resource paths travel as plain strings in the canonical
//! `collection/uid/collection/uid/...` form; an empty string denotes an
//! unset reference.

/// Identifying information carried by every server object.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BasicInfo {
    /// Canonical resource path of the object. Empty for unstored objects.
    #[prost(string, tag = "1")]
    pub resource_path: String,
    /// Id of the object, unique within its collection.
    #[prost(string, tag = "2")]
    pub id: String,
    /// Display name of the object.
    #[prost(string, tag = "3")]
    pub name: String,
    /// Optimistic-concurrency token; increases on every successful mutation.
    #[prost(int64, tag = "4")]
    pub version: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRequest {
    #[prost(string, tag = "1")]
    pub resource_path: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteRequest {
    #[prost(string, tag = "1")]
    pub resource_path: String,
    #[prost(int64, tag = "2")]
    pub version: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListRequest {
    #[prost(string, tag = "1")]
    pub collection_path: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Empty {}

/// Up-to-date state of an object with respect to the lay-up computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum StatusType {
    Uptodate = 0,
    Notuptodate = 1,
}

/// Unit system a model is defined in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum UnitSystemType {
    Undefined = 0,
    Si = 1,
    Mks = 2,
    Umks = 3,
    Cgs = 4,
    Mpa = 5,
    Bft = 6,
    Bin = 7,
}
