// A shared, stateful encoder once corrupted output when several export
// workers compressed in parallel. These tests drive one `Compressor` from
// many threads and check every worker gets back exactly its own payload.
#[cfg(test)]
mod tests {
    use std::{io::Read, thread, time::Duration};

    use crossbeam::channel::{bounded, unbounded, RecvTimeoutError};
    use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use record_compress::compression::{new_compressor, CompressionError, CompressionFormat, Compressor};

    // Upper end of a typical record.
    const DATA_LEN: usize = 128 * 1024;
    const TIMEOUT: Duration = Duration::from_secs(15);

    fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = vec![0u8; len];
        rng.fill(&mut data[..]);
        data
    }

    fn decompress(format: CompressionFormat, input: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        let res = match format {
            CompressionFormat::None | CompressionFormat::Noop => {
                out.extend_from_slice(input);
                Ok(input.len())
            }
            CompressionFormat::Gzip  => GzDecoder::new(input).read_to_end(&mut out),
            CompressionFormat::Zlib  => ZlibDecoder::new(input).read_to_end(&mut out),
            CompressionFormat::Flate => DeflateDecoder::new(input).read_to_end(&mut out),
        };
        res.expect("worker output should decode");
        out
    }

    /// Spawn `workers` threads sharing `compressor`; each compresses its own
    /// random buffer. Returns (input, output) pairs.
    fn run_workers(
        compressor: Compressor,
        workers: usize,
    ) -> Vec<(Vec<u8>, Result<Vec<u8>, CompressionError>)> {
        let (tx, rx) = unbounded();
        let handles: Vec<_> = (0..workers)
            .map(|i| {
                let tx = tx.clone();
                thread::spawn(move || {
                    let data = random_bytes(DATA_LEN, 1000 + i as u64);
                    let result = compressor.compress(&data);
                    let _ = tx.send((data, result));
                })
            })
            .collect();
        drop(tx);

        for h in handles {
            h.join().expect("worker panicked");
        }
        rx.iter().collect()
    }

    fn with_timeout<F>(f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let (done_tx, done_rx) = bounded(1);
        thread::spawn(move || {
            f();
            let _ = done_tx.send(());
        });
        match done_rx.recv_timeout(TIMEOUT) {
            Ok(()) => {}
            Err(RecvTimeoutError::Timeout) => panic!("concurrent compression did not finish in time"),
            Err(RecvTimeoutError::Disconnected) => panic!("concurrent compression check failed"),
        }
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn failed_check_is_not_reported_as_timeout() {
        with_timeout(|| panic!("worker output mismatch"));
    }

    #[test]
    fn concurrent_gzip_workers_finish_without_errors() {
        with_timeout(|| {
            let compressor = new_compressor("gzip").unwrap();
            let results = run_workers(compressor, 4);
            assert_eq!(results.len(), 4);

            for (input, output) in results {
                let output = output.expect("concurrent compress should succeed");
                assert_eq!(decompress(CompressionFormat::Gzip, &output), input);
            }
        });
    }

    #[test]
    fn concurrent_workers_never_see_each_others_data() {
        with_timeout(|| {
            for format in CompressionFormat::ALL {
                let compressor = new_compressor(format.as_str()).unwrap();
                let results = run_workers(compressor, 8);

                let inputs: Vec<_> = results.iter().map(|(input, _)| input.clone()).collect();
                for (input, output) in &results {
                    let decoded = decompress(format, output.as_ref().unwrap());
                    assert_eq!(&decoded, input, "format {format}");
                    let matches = inputs.iter().filter(|other| **other == decoded).count();
                    assert_eq!(matches, 1, "format {format}: output matched {matches} inputs");
                }
            }
        });
    }

    #[test]
    fn many_calls_per_worker_stay_independent() {
        with_timeout(|| {
            let compressor = new_compressor("zlib").unwrap();
            let (tx, rx) = unbounded();

            let handles: Vec<_> = (0..4u64)
                .map(|w| {
                    let tx = tx.clone();
                    thread::spawn(move || {
                        for n in 0..16u64 {
                            let data = random_bytes(4096, w * 100 + n);
                            let out = compressor.compress(&data).unwrap();
                            let _ = tx.send((data, out));
                        }
                    })
                })
                .collect();
            drop(tx);
            for h in handles {
                h.join().unwrap();
            }

            let mut seen = 0;
            for (input, output) in rx.iter() {
                assert_eq!(decompress(CompressionFormat::Zlib, &output), input);
                seen += 1;
            }
            assert_eq!(seen, 64);
        });
    }
}
