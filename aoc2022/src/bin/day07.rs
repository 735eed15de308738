use aoc_harness::time;
use fxhash::FxHashMap;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 7)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

/// Total size of every directory, keyed by its full path.
fn directory_sizes(input: &str) -> FxHashMap<Vec<&str>, u64> {
    let mut cwd = vec![];
    let mut sizes: FxHashMap<Vec<&str>, u64> = FxHashMap::default();

    for line in input.trim().lines() {
        let words = line.split_whitespace().collect::<Vec<_>>();
        match words[..] {
            ["$", "cd", "/"] => cwd.clear(),
            ["$", "cd", ".."] => {
                cwd.pop();
            }
            ["$", "cd", dir] => cwd.push(dir),
            ["$", "ls"] | ["dir", _] => {}
            [size, _] => {
                let size = size.parse::<u64>().unwrap();
                for depth in 0..=cwd.len() {
                    *sizes.entry(cwd[..depth].to_vec()).or_default() += size;
                }
            }
            _ => unreachable!(),
        }
    }

    sizes
}

fn solve(input: &str) -> u64 {
    directory_sizes(input)
        .values()
        .filter(|&&size| size <= 100000)
        .sum()
}

fn bonus(input: &str) -> u64 {
    let sizes = directory_sizes(input);
    let root: Vec<&str> = vec![];
    let needed = sizes[&root] - (70000000 - 30000000);

    sizes
        .values()
        .copied()
        .filter(|&size| size >= needed)
        .min()
        .unwrap()
}

#[test]
fn test() {
    let example_input = "
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

    assert_eq!(solve(example_input), 95437);
    assert_eq!(bonus(example_input), 24933642);
}
