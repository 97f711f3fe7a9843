use schnorr::{Signature, SigningKey, VerifyingKey};
use sha2::{Digest, Sha256};

fn main() {
    let mut secret = [0u8; 32];
    secret[31] = 42;
    let sk = SigningKey::from_bytes(&secret).expect("secret in range");
    let vk = VerifyingKey::from(&sk);

    let sk_bytes = bincode::serialize(&sk).expect("serialize sk");
    let vk_bytes = bincode::serialize(&vk).expect("serialize vk");

    // Messages are 32-byte digests of the application payload
    let msg = Sha256::digest(b"hello schnorr");

    let sig = sk.sign(&msg).expect("sign");
    let sig_bytes = bincode::serialize(&sig).expect("serialize sig");

    let sk2: SigningKey = bincode::deserialize(&sk_bytes).expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&vk_bytes).expect("deserialize vk");
    let sig2: Signature = bincode::deserialize(&sig_bytes).expect("deserialize sig");

    assert!(vk2.verify(&msg, &sig2).expect("verify"));
    assert!(schnorr::verify(&vk2.to_bytes(), &msg, &sig2.to_bytes()).expect("verify bytes"));

    assert_eq!(sk2.sign(&msg).expect("sign"), sig);
    println!("public key: {}", hex::encode(vk.to_bytes()));
    println!("signature:  {}", hex::encode(sig.to_bytes()));
}
