use chrono::{Duration, NaiveDateTime};
use rand::{Rng, seq::IndexedRandom};

pub const HEADER: &str = "path_to_file,timestamp,browser,status,request_size";

const PATHS: [(&str, u8); 8] = [
    ("/", 20),
    ("/index.html", 30),
    ("/about.html", 10),
    ("/funny.html", 10),
    ("/images/splash.png", 20),
    ("/images/header.jpg", 15),
    ("/images/footer.GIF", 5),
    ("/downloads/report.pdf", 5),
];
const AGENTS: [(&str, u8); 6] = [
    (
        "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0",
        25,
    ),
    (
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/70.0.3538.77 Safari/537.36",
        40,
    ),
    (
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.1 Safari/605.1.15",
        15,
    ),
    (
        "Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1; Trident/5.0)",
        10,
    ),
    (
        "Mozilla/5.0 (Windows NT 10.0; Trident/7.0; rv:11.0) like Gecko",
        5,
    ),
    ("curl/7.88.1", 5),
];
const STATUS: [(u16, u8); 5] = [(200, 60), (301, 5), (304, 10), (404, 20), (500, 5)];

const SECONDS_PER_DAY: i64 = 86_400;

pub fn generate_row<R: Rng + ?Sized>(rng: &mut R, day_start: NaiveDateTime) -> String {
    let path = PATHS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let timestamp = day_start + Duration::seconds(rng.random_range(0..SECONDS_PER_DAY));
    let agent = AGENTS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let status = STATUS.choose_weighted(rng, |(_, w)| *w).unwrap().0;
    let size = rng.random_range(100..50_000);

    // The agent field is quoted: real user agents may contain commas.
    format!(
        "{path},{},\"{agent}\",{status},{size}",
        timestamp.format("%Y-%m-%d %H:%M:%S")
    )
}
