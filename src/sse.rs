use crate::error::ControllerError;
use crate::protocol::StreamEvent;

/// Incremental decoder for the `/branding` event stream.
///
/// Frames arrive as `data: {json}` lines terminated by a blank line, but a
/// network chunk can end anywhere, including in the middle of a JSON payload
/// or of a multi-byte UTF-8 character. The carry-over buffer therefore holds
/// raw bytes; text decoding happens only on complete frames, so no split can
/// corrupt content. Lines without the `data: ` marker are discarded.
#[derive(Debug, Default)]
pub struct SseDecoder {
    carry: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one network chunk, returning every event completed by it.
    ///
    /// A frame whose payload is not valid JSON, or whose bytes are not valid
    /// UTF-8, is a protocol failure, fatal to the submission.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<StreamEvent>, ControllerError> {
        self.carry.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(sep) = self.carry.windows(2).position(|w| w == b"\n\n") {
            let frame: Vec<u8> = self.carry.drain(..sep + 2).collect();
            if let Some(event) = Self::parse_frame(&frame)? {
                events.push(event);
            }
        }
        Ok(events)
    }

    /// Flush a trailing frame the server never terminated with a blank line.
    pub fn finish(&mut self) -> Result<Option<StreamEvent>, ControllerError> {
        let frame = std::mem::take(&mut self.carry);
        Self::parse_frame(&frame)
    }

    /// Bytes buffered waiting for a frame terminator.
    pub fn pending(&self) -> usize {
        self.carry.len()
    }

    fn parse_frame(frame: &[u8]) -> Result<Option<StreamEvent>, ControllerError> {
        // The frame is complete, so any invalid UTF-8 here is the server's
        // fault rather than a chunk split.
        let text = std::str::from_utf8(frame)?;
        for line in text.lines() {
            let line = line.trim();
            if let Some(payload) = line.strip_prefix("data: ") {
                let event: StreamEvent = serde_json::from_str(payload)?;
                return Ok(Some(event));
            }
        }
        Ok(None)
    }
}
