pub const STX: u8 = 2;
pub const CR: u8 = 13;
pub const RESULT_IDX: usize = 3;
pub const ACK: u8 = b'_';

pub const fn bool_to_byte(value: bool) -> u8 {
    if value {
        b'1'
    } else {
        b'0'
    }
}

/// Wraps a payload as `STX tag payload CR`.
pub fn make_frame(tag: u8, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(payload.len() + 3);
    frame.push(STX);
    frame.push(tag);
    frame.extend_from_slice(payload);
    frame.push(CR);
    frame
}

/// Payload between the tag and the trailing CR, if `frame` is well formed and tagged `tag`.
pub fn frame_payload(frame: &[u8], tag: u8) -> Option<&[u8]> {
    match frame {
        [STX, t, payload @ .., CR] if *t == tag => Some(payload),
        _ => None,
    }
}

pub fn is_ack(reply: &[u8], tag: u8) -> bool {
    frame_payload(reply, tag).is_some() && reply.get(RESULT_IDX) == Some(&ACK)
}
