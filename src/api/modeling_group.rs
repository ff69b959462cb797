// ABOUTME: Wire messages of the modeling group resource service

//! Modeling group service messages.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Properties {}
