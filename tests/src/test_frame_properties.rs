// Licensed under the Apache-2.0 license

//! Frame codec properties

use crypti2c_command_types::{
    dev_rev, random, read, CommandDescriptor, RandomMode, ReadSize, Zone,
    MAX_COMMAND_FRAME_SIZE, MAX_COMMAND_PAYLOAD_SIZE,
};
use crypti2c_osal::OctetBuffer;
use crypti2c_transport::{parse_command_frame, serialize, validate_response};
use proptest::prelude::*;

fn descriptor_strategy() -> impl Strategy<Value = CommandDescriptor> {
    (
        any::<u8>(),
        any::<u8>(),
        any::<[u8; 2]>(),
        proptest::collection::vec(any::<u8>(), 0..=MAX_COMMAND_PAYLOAD_SIZE),
    )
        .prop_map(|(opcode, param1, param2, payload)| {
            CommandDescriptor::raw(opcode, param1, param2).with_payload(payload)
        })
}

proptest! {
    #[test]
    fn prop_serialize_parse_round_trip(cmd in descriptor_strategy()) {
        let frame = serialize(&cmd).unwrap();
        prop_assert_eq!(frame.len(), cmd.payload.len() + 7);
        prop_assert_eq!(frame.count() as usize, frame.len());

        let parsed = parse_command_frame(frame.as_bytes()).unwrap();
        prop_assert_eq!(parsed.opcode, cmd.opcode);
        prop_assert_eq!(parsed.param1, cmd.param1);
        prop_assert_eq!(parsed.param2, cmd.param2);
        prop_assert_eq!(parsed.payload.as_slice(), cmd.payload.as_slice());
    }

    #[test]
    fn prop_serialized_frame_validates_as_response(cmd in descriptor_strategy()) {
        let frame = serialize(&cmd).unwrap();
        prop_assert!(validate_response(frame.as_bytes(), MAX_COMMAND_FRAME_SIZE).is_ok());
    }

    /// Flipping any bit between the count byte and the checksum is caught
    #[test]
    fn prop_single_bit_flip_detected(cmd in descriptor_strategy(), pick in any::<prop::sample::Index>()) {
        let frame = serialize(&cmd).unwrap();
        let mut raw = frame.as_bytes().to_vec();

        // bits of bytes 1..len-2
        let flippable = (raw.len() - 3) * 8;
        let bit = pick.index(flippable);
        raw[1 + bit / 8] ^= 1 << (bit % 8);

        prop_assert!(validate_response(&raw, MAX_COMMAND_FRAME_SIZE).is_err());
    }

    #[test]
    fn prop_validator_never_panics(raw in proptest::collection::vec(any::<u8>(), 0..64), capacity in 0usize..100) {
        let _ = validate_response(&raw, capacity);
    }

    #[test]
    fn prop_oversized_payload_rejected(extra in 1usize..32) {
        let cmd = CommandDescriptor::raw(0x12, 0, [0, 0])
            .with_payload(OctetBuffer::zeroed(MAX_COMMAND_PAYLOAD_SIZE + extra));
        prop_assert!(serialize(&cmd).is_err());
    }
}

#[test]
fn test_count_byte_flips_detected() {
    let frames = [
        serialize(&random(RandomMode::UpdateSeed)).unwrap(),
        serialize(&dev_rev()).unwrap(),
        serialize(&read(Zone::Config, 0, ReadSize::Block)).unwrap(),
        serialize(&CommandDescriptor::raw(0x08, 0, [3, 0]).with_payload((0u8..32).collect::<Vec<u8>>()))
            .unwrap(),
    ];

    for frame in &frames {
        for bit in 0..8 {
            let mut raw = frame.as_bytes().to_vec();
            raw[0] ^= 1 << bit;
            assert!(
                validate_response(&raw, MAX_COMMAND_FRAME_SIZE).is_err(),
                "count flip {bit} on {:02x?}",
                frame.as_bytes()
            );
        }
    }
}

#[test]
fn test_checksum_byte_flips_detected() {
    let frame = serialize(&dev_rev()).unwrap();
    let len = frame.len();
    for bit in 0..16 {
        let mut raw = frame.as_bytes().to_vec();
        raw[len - 2 + bit / 8] ^= 1 << (bit % 8);
        assert!(validate_response(&raw, MAX_COMMAND_FRAME_SIZE).is_err());
    }
}
