// ABOUTME: Wire message definitions for the ACP gRPC API
// ABOUTME: Hand-maintained prost types mirroring the server's protobuf schema

//! Wire messages of the ACP gRPC API.
//!
//! These types mirror the server's protobuf schema. They are maintained by
//! hand instead of being generated in a build step, so the crate builds
//! without a protoc toolchain; tags and field types must match the server
//! schema exactly.
//!
//! Every resource service shares the same envelope shapes (`ObjectInfo`,
//! `CreateRequest`, `ListReply`), differing only in the properties payload.
//! The [`generic`] module defines those envelopes once, generic over the
//! properties message.

pub mod analysis_ply;
pub mod base;
pub mod cad_geometry;
pub mod control;
pub mod edge_set;
pub mod element_set;
pub mod fabric;
pub mod file_transfer;
pub mod generic;
pub mod lookup_table;
pub mod material;
pub mod mesh_query;
pub mod model;
pub mod modeling_group;
pub mod modeling_ply;
pub mod oriented_selection_set;
pub mod production_ply;
pub mod rosette;
pub mod selection_rules;
pub mod sensor;
pub mod solid_model;
pub mod stackup;
