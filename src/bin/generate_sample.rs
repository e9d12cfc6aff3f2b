use serde_json::{Value, json};

/// Minimal deterministic PRNG (splitmix64)
struct SampleRng {
    state: u64,
}

impl SampleRng {
    fn new(seed: u64) -> Self {
        SampleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn pick(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

const CHARACTERS: &[(u64, &str)] = &[
    (1009610, "Spider-Man"),
    (1009368, "Iron Man"),
    (1009220, "Captain America"),
    (1009718, "Wolverine"),
    (1009629, "Storm"),
    (1009664, "Thor"),
    (1009351, "Hulk"),
    (1009189, "Black Widow"),
    (1009282, "Doctor Strange"),
    (1009708, "Venom"),
];

const SERIES: &[(&str, &str, u32)] = &[
    ("Amazing Spider-Man (2018)", "comic", 4),
    ("Immortal X-Men (2022)", "comic", 4),
    ("Avengers (2023)", "comic", 3),
    ("Daredevil (2019)", "comic", 3),
    ("House of M (2005)", "trade paperback", 2),
    ("Infinity Gauntlet (1991)", "graphic novel", 2),
];

fn comic_record(rng: &mut SampleRng, id: u64, series: &str, kind: &str, issue: u32) -> Value {
    // 1–4 distinct listed characters per issue.
    let listed = 1 + rng.pick(4);
    let mut picks: Vec<usize> = Vec::with_capacity(listed);
    while picks.len() < listed {
        let candidate = rng.pick(CHARACTERS.len());
        if !picks.contains(&candidate) {
            picks.push(candidate);
        }
    }
    let items: Vec<Value> = picks
        .iter()
        .map(|&i| json!({"id": CHARACTERS[i].0, "name": CHARACTERS[i].1}))
        .collect();

    // The upstream count regularly exceeds the listed subset.
    let available = items.len() as u64 + rng.pick(4) as u64;

    let page_count = [32, 48, 112][rng.pick(3)];
    let price = [2.99, 3.99, 4.99][rng.pick(3)];
    let description: Value = if rng.pick(3) == 0 {
        Value::Null
    } else {
        json!(format!("{series} issue #{issue}."))
    };

    json!({
        "id": id,
        "title": format!("{series} #{issue}"),
        "type": kind,
        "issueNumber": issue,
        "pageCount": page_count,
        "description": description,
        "characters": {
            "available": available,
            "items": items
        },
        "prices": [{"type": "printPrice", "price": price}],
        "thumbnail": {"path": format!("http://i.example/u/prod/comics/{id}"), "extension": "jpg"}
    })
}

fn main() {
    let mut rng = SampleRng::new(42);

    let mut results: Vec<Value> = Vec::new();
    let mut id: u64 = 40128;

    for &(series, kind, issues) in SERIES {
        for issue in 1..=issues {
            results.push(comic_record(&mut rng, id, series, kind, issue));
            id += 1;
        }
    }

    // Two rows the inclusion filter is expected to drop: the well-known
    // placeholder entry and an issue with no characters at all.
    results.push(json!({
        "id": id,
        "title": "Marvel Previews (2017)",
        "type": "comic",
        "issueNumber": 0,
        "pageCount": 112,
        "characters": {"available": 5, "items": []},
        "prices": [{"type": "printPrice", "price": 0.0}],
        "thumbnail": {"path": format!("http://i.example/u/prod/comics/{id}"), "extension": "jpg"}
    }));
    results.push(json!({
        "id": id + 1,
        "title": "Handbook Update (2024) #1",
        "type": "comic",
        "issueNumber": 1,
        "pageCount": 16,
        "characters": {"available": 0, "items": []},
        "prices": [],
        "thumbnail": null
    }));

    let record_count = results.len();
    let envelope = json!({
        "code": 200,
        "status": "Ok",
        "data": {"results": results}
    });

    let output_path = "sample_catalog.json";
    let text = serde_json::to_string_pretty(&envelope).expect("Failed to serialize sample catalog");
    std::fs::write(output_path, text).expect("Failed to create output file");

    println!("Wrote {record_count} records to {output_path}");
}
