use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 9)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn parse(input: &str) -> Vec<usize> {
    input.trim().bytes().map(|c| (c - b'0') as usize).collect()
}

fn checksum(blocks: &[Option<usize>]) -> usize {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(i, id)| id.map(|id| i * id))
        .sum()
}

fn solve(input: &str) -> usize {
    let mut blocks = vec![];
    for (i, n) in parse(input).into_iter().enumerate() {
        let id = (i % 2 == 0).then_some(i / 2);
        blocks.extend(std::iter::repeat(id).take(n));
    }

    let (mut free, mut last) = (0, blocks.len() - 1);
    loop {
        while free < blocks.len() && blocks[free].is_some() {
            free += 1;
        }
        while last > 0 && blocks[last].is_none() {
            last -= 1;
        }
        if free >= last {
            break;
        }
        blocks.swap(free, last);
    }

    checksum(&blocks)
}

fn bonus(input: &str) -> usize {
    // (start, len) for each file, and the free spans between them
    let mut files = vec![];
    let mut spans = vec![];
    let mut pos = 0;

    for (i, n) in parse(input).into_iter().enumerate() {
        if i % 2 == 0 {
            files.push((pos, n));
        } else {
            spans.push((pos, n));
        }
        pos += n;
    }

    for file in files.iter_mut().rev() {
        let Some(span) = spans
            .iter_mut()
            .take_while(|(start, _)| *start < file.0)
            .find(|(_, len)| *len >= file.1)
        else {
            continue;
        };

        file.0 = span.0;
        span.0 += file.1;
        span.1 -= file.1;
    }

    files
        .iter()
        .enumerate()
        .map(|(id, &(start, len))| (start..start + len).map(|i| i * id).sum::<usize>())
        .sum()
}

#[test]
fn test() {
    assert_eq!(solve("12345"), 60);
    assert_eq!(solve("2333133121414131402"), 1928);
    assert_eq!(bonus("2333133121414131402"), 2858);
}
