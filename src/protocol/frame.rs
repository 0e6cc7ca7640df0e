/// Length of the ASCII tag prefixed to every outbound frame
pub const TAG_LEN: usize = 4;

/// 4-byte ASCII tag identifying an outbound frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameTag {
    /// `ien:` — continue the image-and-prompt flow on the peer
    ImageAndPrompt,
    /// `ast:` — prompt only (the peer discards any pending image data)
    PromptOnly,
    /// `aen:` — end of the audio stream, no payload
    AudioEnd,
    /// `dat:` — chunk of captured audio samples
    Data,
}

impl FrameTag {
    pub const fn as_bytes(self) -> &'static [u8; TAG_LEN] {
        match self {
            FrameTag::ImageAndPrompt => b"ien:",
            FrameTag::PromptOnly => b"ast:",
            FrameTag::AudioEnd => b"aen:",
            FrameTag::Data => b"dat:",
        }
    }
}

/// One tagged message unit sent over the wireless transport
///
/// Wire format is the 4-byte tag followed by the raw payload; the transport
/// itself provides framing, so no length prefix is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundFrame {
    pub tag: FrameTag,
    pub payload: Vec<u8>,
}

impl OutboundFrame {
    /// Initial frame for a cycle: tag only, no payload
    pub fn initial(tag: FrameTag) -> Self {
        Self {
            tag,
            payload: Vec::new(),
        }
    }

    /// `dat:` frame carrying one or two concatenated chunks
    pub fn data(payload: Vec<u8>) -> Self {
        Self {
            tag: FrameTag::Data,
            payload,
        }
    }

    /// `aen:` marker ending the audio stream
    pub fn audio_end() -> Self {
        Self {
            tag: FrameTag::AudioEnd,
            payload: Vec::new(),
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(TAG_LEN + self.payload.len());
        bytes.extend_from_slice(self.tag.as_bytes());
        bytes.extend_from_slice(&self.payload);
        bytes
    }
}
