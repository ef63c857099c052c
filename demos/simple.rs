use rand::rngs::OsRng;
use rand::RngCore;
use sha3::{Digest, Keccak256};
use wots_plus::{Error, Keccak256Hasher, Params, Signature, WotsPlus};

fn simple_wots() -> Result<(), Error> {
    // Create a scheme instance with the default parameters (n = 32, w = 16)
    // and Keccak-256 as the hash function.
    let wots = WotsPlus::new(Keccak256Hasher)?;
    let params = wots.params();
    println!(
        "WOTS+ with {} chains of length {}: {} byte signatures, {} byte public keys",
        params.num_signature_chunks(),
        params.chain_len(),
        params.signature_size(),
        params.public_key_size()
    );

    // The library does not generate seeds. Here we draw both from the OS.
    let mut private_seed = [0u8; 32];
    let mut public_seed = [0u8; 32];
    OsRng.fill_bytes(&mut private_seed);
    OsRng.fill_bytes(&mut public_seed);

    let (public_key, private_key) = wots.generate_key_pair(&private_seed, &public_seed)?;

    // WOTS+ signs a fixed-size digest, so hash the actual message first.
    let msg = "Hi! This is the one and only message signed with this key.".as_bytes();
    let digest: [u8; 32] = Keccak256::digest(msg).into();
    let signature = wots.sign(private_key.as_ref(), &public_seed, &digest)?;

    // Anyone holding the 64-byte public key can verify.
    let public_key_bytes = public_key.to_bytes();
    assert!(wots.verify(&public_key_bytes, &digest, &signature)?);

    // Signatures travel as plain bytes.
    let wire = signature.to_bytes();
    let received = Signature::from_bytes(params, &wire)?;
    assert!(wots.verify(&public_key_bytes, &digest, &received)?);

    // A different message does not verify. Note that this key pair must not sign it:
    // a second signature would let others forge messages.
    let other: [u8; 32] = Keccak256::digest(b"Some other message").into();
    assert!(!wots.verify(&public_key_bytes, &other, &signature)?);

    // A verifier checking many signatures under one public seed can expand the
    // randomization elements only once.
    let elements = wots.generate_randomization_elements(public_key.public_seed())?;
    assert!(wots.verify_with_randomization_elements(
        public_key.public_key_hash(),
        &digest,
        &signature,
        &elements,
    )?);

    // Shorter chains give larger but faster-to-verify signatures.
    let wots_4 = WotsPlus::with_params(Keccak256Hasher, Params::new(32, 4)?)?;
    let (pk_4, sk_4) = wots_4.generate_key_pair(&private_seed, &public_seed)?;
    let sig_4 = wots_4.sign(sk_4.as_ref(), &public_seed, &digest)?;
    assert!(wots_4.verify(&pk_4.to_bytes(), &digest, &sig_4)?);
    println!(
        "with w = 4: {} chains, {} byte signatures",
        sig_4.len(),
        sig_4.to_bytes().len()
    );

    // Malformed input is an error, not a failed verification.
    let mut chunks = signature.into_chunks();
    chunks.pop();
    let truncated = Signature::from(chunks);
    assert!(matches!(
        wots.verify(&public_key_bytes, &digest, &truncated),
        Err(Error::InvalidLength { .. })
    ));

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    if let Err(e) = simple_wots() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
