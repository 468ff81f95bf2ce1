use eyre::{OptionExt, Result, eyre};
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, char, digit1, newline};
use nom::combinator::{all_consuming, map, map_res, opt, recognize, value};
use nom::multi::separated_list1;
use nom::sequence::terminated;
use nom::{IResult, Parser};

use patrol::{Move, Point2D, is_reachable, parse_route};

#[derive(Debug, Clone, PartialEq)]
struct Case {
    target: Point2D,
    route: Vec<Move>,
    expected: bool,
}

fn parse_number(input: &str) -> IResult<&str, isize> {
    map_res(recognize((opt(char('-')), digit1)), |s: &str| s.parse::<isize>()).parse(input)
}

fn parse_verdict(input: &str) -> IResult<&str, bool> {
    alt((value(true, tag("Possible")), value(false, tag("Impossible")))).parse(input)
}

fn parse_case(input: &str) -> IResult<&str, Case> {
    map(
        (
            terminated(parse_number, newline),
            terminated(parse_number, newline),
            terminated(map_res(alpha1, parse_route), newline),
            parse_verdict,
        ),
        |(x, y, route, expected)| Case { target: Point2D(x, y), route, expected },
    )
    .parse(input)
}

fn parse_file(input: &str) -> IResult<&str, Vec<Case>> {
    all_consuming(terminated(
        separated_list1((newline, newline), parse_case),
        opt(newline),
    ))
    .parse(input)
}

fn verdict(possible: bool) -> &'static str {
    if possible { "Possible" } else { "Impossible" }
}

fn check_cases(fname: &str) -> Result<()> {
    let body: String = std::fs::read_to_string(fname)?;
    let cases = match parse_file(&body) {
        Ok((_, v)) => v,
        Err(e) => match e {
            nom::Err::Incomplete(_) => unreachable!(),
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                return Err(eyre!("{fname}: parsing failed: {e:?}"));
            }
        },
    };
    let mut mismatches = 0usize;
    for case in &cases {
        let answer = is_reachable(case.target.clone(), &case.route);
        if answer != case.expected {
            let route: String = case.route.iter().map(|m| m.to_string()).collect();
            println!(
                "{} {} {route}: expected {}, got {}",
                case.target.0,
                case.target.1,
                verdict(case.expected),
                verdict(answer)
            );
            mismatches += 1;
        }
    }
    println!("{} cases, {mismatches} mismatches", cases.len());
    Ok(())
}

fn main() -> Result<()> {
    let mut args = std::env::args();
    let first = args.nth(1).ok_or_eyre("filename was not provided")?;
    match (args.next(), args.next()) {
        (None, None) => check_cases(&first),
        (Some(y), Some(route)) => {
            let target = Point2D(first.parse()?, y.parse()?);
            let route = parse_route(&route)?;
            println!("{}", verdict(is_reachable(target, &route)));
            Ok(())
        }
        _ => Err(eyre!("expected a case file, or a target and route as X Y ROUTE")),
    }
}
