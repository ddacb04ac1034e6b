use rand::Rng;

// No I, l, 1, O or 0 in the charset.
pub const PASSWORD_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz23456789@#$%&*";
pub const PASSWORD_LEN: usize = 8;
pub const NATIONAL_ID_LEN: usize = 14;

pub fn verify_national_id(input: &str, expected: &str) -> bool {
    input.len() == NATIONAL_ID_LEN && input == expected
}

pub fn generate_password<R: Rng>(rng: &mut R) -> String {
    (0..PASSWORD_LEN)
        .map(|_| PASSWORD_CHARSET[rng.gen_range(0..PASSWORD_CHARSET.len())] as char)
        .collect()
}

pub fn reset_password<R: Rng>(input: &str, expected: &str, rng: &mut R) -> Option<String> {
    if !verify_national_id(input, expected) {
        log::warn!("identity challenge failed");
        return None;
    }
    log::info!("identity verified, one-time password generated");
    Some(generate_password(rng))
}
