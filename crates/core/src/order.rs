use crate::record::PacketRecord;

/// Sort records by RTP timestamp, ascending.
///
/// Comparison is on the stored signed value, so timestamps written above
/// `i32::MAX` (negative after wrapping) sort first. Equal timestamps may be
/// reordered.
pub fn sort_by_rtp_timestamp(mut records: Vec<PacketRecord>) -> Vec<PacketRecord> {
    records.sort_unstable_by_key(|r| r.rtp_ts);
    tracing::debug!(records = records.len(), "sorted by RTP timestamp");
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packet(rtp_ts: i32) -> PacketRecord {
        PacketRecord {
            ip_proto: 17,
            ip_src: 1,
            src_port: 5004,
            ip_dst: 2,
            ssrc: rtp_ts,
            rtp_ts,
            capture_sec: 0,
            capture_usec: 0,
            media_type: 16,
        }
    }

    #[test]
    fn ascending_order() {
        let sorted = sort_by_rtp_timestamp(vec![packet(300), packet(100), packet(200)]);
        let ts: Vec<i32> = sorted.iter().map(|r| r.rtp_ts).collect();
        assert_eq!(ts, vec![100, 200, 300]);
    }

    #[test]
    fn signed_comparison() {
        let sorted = sort_by_rtp_timestamp(vec![packet(5), packet(u32::MAX as i32), packet(i32::MAX)]);
        let ts: Vec<i32> = sorted.iter().map(|r| r.rtp_ts).collect();
        assert_eq!(ts, vec![-1, 5, i32::MAX]);
    }

    #[test]
    fn random_inputs_are_non_decreasing() {
        for _ in 0..50 {
            let input: Vec<PacketRecord> = (0..150)
                .map(|_| packet((rand::random::<u32>() % 500) as i32 - 250))
                .collect();
            let sorted = sort_by_rtp_timestamp(input.clone());
            assert_eq!(sorted.len(), input.len());
            assert!(sorted.windows(2).all(|w| w[0].rtp_ts <= w[1].rtp_ts));
        }
    }
}
