//! Session id generation.
//!
//! Session ids are 16-character strings using Crockford's Base32 alphabet.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U
const SESSION_ID_LEN: usize = 16;

/// Generate a fresh session id.
pub fn generate_session_id() -> String {
    let mut rng = rand::rng();

    let mut s = String::with_capacity(SESSION_ID_LEN);
    for _ in 0..SESSION_ID_LEN {
        s.push(CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_session_id_produces_different_results() {
        let id1 = generate_session_id();
        let id2 = generate_session_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_generate_session_id_has_correct_length_and_alphabet() {
        let id = generate_session_id();
        assert_eq!(id.len(), SESSION_ID_LEN);
        assert!(id.bytes().all(|b| CROCKFORD.contains(&b)));
    }
}
