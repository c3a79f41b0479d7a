//! Worked example inputs with their published answers.

/// One day's example input and the answers it must produce.
#[derive(Clone, Copy, Debug)]
pub struct Sample {
    pub day: u8,
    pub input: &'static str,
    pub part_one: i64,
    pub part_two: i64,
}

pub const DAY01: Sample = Sample {
    day: 1,
    input: "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n",
    part_one: 7,
    part_two: 5,
};

pub const DAY02: Sample = Sample {
    day: 2,
    input: "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n",
    part_one: 150,
    part_two: 900,
};

pub const DAY03: Sample = Sample {
    day: 3,
    input: "00100\n11110\n10110\n10111\n10101\n01111\n\
            00111\n11100\n10000\n11001\n00010\n01010\n",
    part_one: 198,
    part_two: 230,
};

pub const DAY04: Sample = Sample {
    day: 4,
    input: "7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
",
    part_one: 4512,
    part_two: 1924,
};

pub const DAY05: Sample = Sample {
    day: 5,
    input: "0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
",
    part_one: 5,
    part_two: 12,
};

pub const DAY06: Sample = Sample {
    day: 6,
    input: "3,4,3,1,2\n",
    part_one: 5934,
    part_two: 26_984_457_539,
};

pub const DAY07: Sample = Sample {
    day: 7,
    input: "16,1,2,0,4,2,7,1,2,14\n",
    part_one: 37,
    part_two: 168,
};

/// Every sample, ordered by day.
pub const ALL: [Sample; 7] = [DAY01, DAY02, DAY03, DAY04, DAY05, DAY06, DAY07];
