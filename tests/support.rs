// tests/support.rs
//! Test doubles and fixtures: deterministic RNGs, cipher transforms, key values

use token_crypto::byte_string::ByteString;
use token_crypto::enums::Direction;
use token_crypto::error::{CryptoError, Result};
use token_crypto::rng::RandomSource;
use token_crypto::symmetric::{CipherMode, CipherTransform, SymmetricKey};

/// RFC 2409 Oakley group 1 prime (768 bits)
#[allow(dead_code)]
pub const OAKLEY_768_P: &str = "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1\
29024E088A67CC74020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437\
4FE1356D6D51C245E485B576625E7EC6F44C42E9A63A3620FFFFFFFFFFFFFFFF";

/// Private value with the top bit set, so its DER INTEGER needs a pad byte
#[allow(dead_code)]
pub const DH_X: &str = "8f3a6c1e44d2b7a90c5e11f02468ace013579bdf2468ace013579bdf02468ace";

#[allow(dead_code)]
pub const DSA_P: &str = "d38311e2cd388c3ed698e82fdf88eb92b5a9a483dc88005d4b725ef341eabb47\
cf8a7a8a41e792a156b7ce97206c4f9c5ce6fc5ae7912102b6b502e59050b5b21ce263dddb2044b652236f4d42ab4b\
5d6aa73189cef1ace778d7845a5c1c1c7147123188f8dc551054ee162b634d60f097f719076640e20980a0093113a8bd73";

#[allow(dead_code)]
pub const DSA_Q: &str = "96c5390a8b612c0e422bb2b0ea194a3ec935a281";

#[allow(dead_code)]
pub const DSA_G: &str = "06b7861abbd35cc89e79c52f68d20875389b127361ca66822138ce4991d2b862\
259d6b4548a6495b195aa0e0b6137ca37eb23b94074d3c3d300042bdf15762812b6333ef7b07ceba78607610fcc9ee\
68491dbc1e34cd12615474e52b18bc934fb00c61d39e7da8902291c4434a4e2224c3f4fd9f93cd6f4f17fc076341a7e7d9";

#[allow(dead_code)]
pub const DSA_X: &str = "8185fee9cc7c0e91fd85503274f1cd5a3fd15a49";

#[allow(dead_code)]
pub fn hex_bytes(hex_str: &str) -> ByteString {
    ByteString::from_hex(hex_str).expect("fixture hex is valid")
}

/// Emits 0, 1, 2, ... so generated keys are predictable
#[derive(Default)]
#[allow(dead_code)]
pub struct SequenceRng {
    next: u8,
    pub calls: usize,
}

impl RandomSource for SequenceRng {
    fn generate_random(&mut self, out: &mut ByteString, len: usize) -> Result<()> {
        self.calls += 1;
        let bytes: Vec<u8> = (0..len)
            .map(|_| {
                let b = self.next;
                self.next = self.next.wrapping_add(1);
                b
            })
            .collect();
        *out = ByteString::from(bytes);
        Ok(())
    }
}

/// Always fails, as an exhausted entropy source would
#[allow(dead_code)]
pub struct FailingRng;

impl RandomSource for FailingRng {
    fn generate_random(&mut self, _out: &mut ByteString, _len: usize) -> Result<()> {
        Err(CryptoError::Rng("entropy source unavailable".into()))
    }
}

/// XORs every byte with the first key byte and records what it was given
#[derive(Default)]
#[allow(dead_code)]
pub struct XorTransform {
    pad: u8,
    pub direction: Option<Direction>,
    pub mode: Option<String>,
    pub iv: Vec<u8>,
    pub padding: Option<bool>,
    pub aborted: bool,
}

impl CipherTransform for XorTransform {
    fn begin(
        &mut self,
        direction: Direction,
        key: &SymmetricKey,
        mode: &CipherMode,
        iv: &ByteString,
        padding: bool,
    ) -> Result<()> {
        self.pad = key.key_bits().as_slice().first().copied().unwrap_or(0);
        self.direction = Some(direction);
        self.mode = Some(mode.as_str().to_owned());
        self.iv = iv.as_slice().to_vec();
        self.padding = Some(padding);
        Ok(())
    }

    fn update(&mut self, input: &ByteString, output: &mut ByteString) -> Result<()> {
        let transformed: Vec<u8> = input.as_slice().iter().map(|b| b ^ self.pad).collect();
        output.extend_from_slice(&transformed);
        Ok(())
    }

    fn finish(&mut self, _output: &mut ByteString) -> Result<()> {
        Ok(())
    }

    fn abort(&mut self) {
        self.aborted = true;
    }
}

/// Where [`FaultyTransform`] should fail
#[derive(Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum FailAt {
    Begin,
    Update,
    Finish,
}

#[allow(dead_code)]
pub struct FaultyTransform {
    pub fail_at: FailAt,
    pub aborted: bool,
}

#[allow(dead_code)]
impl FaultyTransform {
    pub fn new(fail_at: FailAt) -> Self {
        Self {
            fail_at,
            aborted: false,
        }
    }

    fn check(&self, at: FailAt) -> Result<()> {
        if self.fail_at == at {
            return Err(CryptoError::Transform("injected failure".into()));
        }
        Ok(())
    }
}

impl CipherTransform for FaultyTransform {
    fn begin(
        &mut self,
        _direction: Direction,
        _key: &SymmetricKey,
        _mode: &CipherMode,
        _iv: &ByteString,
        _padding: bool,
    ) -> Result<()> {
        self.check(FailAt::Begin)
    }

    fn update(&mut self, _input: &ByteString, output: &mut ByteString) -> Result<()> {
        output.extend_from_slice(b"partial");
        self.check(FailAt::Update)
    }

    fn finish(&mut self, _output: &mut ByteString) -> Result<()> {
        self.check(FailAt::Finish)
    }

    fn abort(&mut self) {
        self.aborted = true;
    }
}
