use weird_text::{EncodedSequence, Transport};

fn main() {
    let sentences = [
        "tacocat",
        "never odd or even",
        "lager, sir, is regal",
        "go hang a salami, I'm a lasagna hog",
        "egad, a base tone denotes a bad age",
    ];

    for sentence in sentences {
        let seq = EncodedSequence::encode(sentence).unwrap();
        let json = seq.to_transport(Transport::Json).unwrap();
        let base64 = seq.to_transport(Transport::Base64).unwrap();
        println!("{:?}", sentence);
        println!("  json   : {}", json);
        println!("  base64 : {}", base64);

        let back = EncodedSequence::from_transport(&base64, Transport::Base64).unwrap();
        assert_eq!(back.decode(), sentence);
    }
}
