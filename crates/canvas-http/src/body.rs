//! Helpers for draining [`Body`] implementations

use bytes::Bytes;
use http_body::Body;
use http_body_util::BodyExt;

/// Collects every frame of a [`Body`] into one [`Bytes`] buffer
pub async fn body_to_bytes<B>(body: &mut B) -> Result<Bytes, B::Error>
where
    B: Body<Data = Bytes> + Unpin,
{
    BodyExt::collect(body).await.map(|buf| buf.to_bytes())
}
