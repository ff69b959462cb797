// ABOUTME: Generic request/reply envelopes shared by all resource services
// ABOUTME: Manual prost Message impls generic over the properties payload

//! Generic resource-service envelopes.
//!
//! Every resource service exposes the same `Get`/`Put`/`Delete`/`List` (and
//! optionally `Create`) methods, whose envelope messages differ only in the
//! concrete properties payload. These envelopes are defined once, generic
//! over the payload, with hand-written [`prost::Message`] impls; the wire
//! encoding is identical to a per-service generated message with the same
//! tags.

use prost::bytes::{Buf, BufMut};
use prost::encoding::{self, DecodeContext, WireType};
use prost::{DecodeError, Message};

use super::base::BasicInfo;

/// Envelope carrying one object's info and properties.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ObjectInfo<P> {
    pub info: Option<BasicInfo>,
    pub properties: Option<P>,
}

impl<P> Message for ObjectInfo<P>
where
    P: Message + Default,
{
    fn encode_raw(&self, buf: &mut impl BufMut) {
        if let Some(ref info) = self.info {
            encoding::message::encode(1u32, info, buf);
        }
        if let Some(ref properties) = self.properties {
            encoding::message::encode(2u32, properties, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::message::merge(
                wire_type,
                self.info.get_or_insert_with(BasicInfo::default),
                buf,
                ctx,
            ),
            2 => encoding::message::merge(
                wire_type,
                self.properties.get_or_insert_with(P::default),
                buf,
                ctx,
            ),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        self.info
            .as_ref()
            .map_or(0, |msg| encoding::message::encoded_len(1u32, msg))
            + self
                .properties
                .as_ref()
                .map_or(0, |msg| encoding::message::encoded_len(2u32, msg))
    }

    fn clear(&mut self) {
        self.info = None;
        self.properties = None;
    }
}

/// Request creating a new object under a collection.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CreateRequest<P> {
    pub collection_path: String,
    pub name: String,
    pub properties: Option<P>,
}

impl<P> Message for CreateRequest<P>
where
    P: Message + Default,
{
    fn encode_raw(&self, buf: &mut impl BufMut) {
        if !self.collection_path.is_empty() {
            encoding::string::encode(1u32, &self.collection_path, buf);
        }
        if !self.name.is_empty() {
            encoding::string::encode(2u32, &self.name, buf);
        }
        if let Some(ref properties) = self.properties {
            encoding::message::encode(3u32, properties, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::string::merge(wire_type, &mut self.collection_path, buf, ctx),
            2 => encoding::string::merge(wire_type, &mut self.name, buf, ctx),
            3 => encoding::message::merge(
                wire_type,
                self.properties.get_or_insert_with(P::default),
                buf,
                ctx,
            ),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if !self.collection_path.is_empty() {
            len += encoding::string::encoded_len(1u32, &self.collection_path);
        }
        if !self.name.is_empty() {
            len += encoding::string::encoded_len(2u32, &self.name);
        }
        if let Some(ref properties) = self.properties {
            len += encoding::message::encoded_len(3u32, properties);
        }
        len
    }

    fn clear(&mut self) {
        self.collection_path.clear();
        self.name.clear();
        self.properties = None;
    }
}

/// Reply to a `List` request.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ListReply<P> {
    pub objects: Vec<ObjectInfo<P>>,
}

impl<P> Message for ListReply<P>
where
    P: Message + Default,
{
    fn encode_raw(&self, buf: &mut impl BufMut) {
        encoding::message::encode_repeated(1u32, &self.objects, buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1 => encoding::message::merge_repeated(wire_type, &mut self.objects, buf, ctx),
            _ => encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        encoding::message::encoded_len_repeated(1u32, &self.objects)
    }

    fn clear(&mut self) {
        self.objects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::rosette::Properties as RosetteProperties;

    fn sample_info() -> ObjectInfo<RosetteProperties> {
        ObjectInfo {
            info: Some(BasicInfo {
                resource_path: "models/m1/rosettes/r1".into(),
                id: "r1".into(),
                name: "Rosette.1".into(),
                version: 3,
            }),
            properties: Some(RosetteProperties {
                origin: vec![0.0, 1.0, 2.0],
                dir1: vec![1.0, 0.0, 0.0],
                dir2: vec![0.0, 1.0, 0.0],
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_object_info_wire_roundtrip() {
        let message = sample_info();
        let bytes = message.encode_to_vec();
        let decoded = ObjectInfo::<RosetteProperties>::decode(bytes.as_slice()).unwrap();
        assert_eq!(message, decoded);
    }

    #[test]
    fn test_encoded_len_matches_encoding() {
        let message = sample_info();
        assert_eq!(message.encoded_len(), message.encode_to_vec().len());
    }

    #[test]
    fn test_create_request_wire_roundtrip() {
        let message = CreateRequest::<RosetteProperties> {
            collection_path: "models/m1/rosettes".into(),
            name: "Rosette.1".into(),
            properties: Some(RosetteProperties::default()),
        };
        let bytes = message.encode_to_vec();
        let decoded = CreateRequest::<RosetteProperties>::decode(bytes.as_slice()).unwrap();
        assert_eq!(message, decoded);
        assert_eq!(message.encoded_len(), bytes.len());
    }

    #[test]
    fn test_list_reply_wire_roundtrip() {
        let message = ListReply::<RosetteProperties> {
            objects: vec![sample_info(), sample_info()],
        };
        let bytes = message.encode_to_vec();
        let decoded = ListReply::<RosetteProperties>::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded.objects.len(), 2);
        assert_eq!(message, decoded);
    }

    #[test]
    fn test_unknown_fields_are_skipped() {
        // A CreateRequest encodes name at tag 2; ObjectInfo has a message at
        // tag 2, so decode it as a ListReply which only knows tag 1.
        let message = CreateRequest::<RosetteProperties> {
            collection_path: String::new(),
            name: "ignored".into(),
            properties: None,
        };
        let bytes = message.encode_to_vec();
        let decoded = ListReply::<RosetteProperties>::decode(bytes.as_slice()).unwrap();
        assert!(decoded.objects.is_empty());
    }
}
