use nom::{
    IResult,
    branch::alt,
    sequence::{ pair, preceded, delimited, separated_pair, },
    combinator::{ map, map_res, recognize, consumed, iterator, },
    bytes::complete::{ tag, take_while, take_while_m_n, },
    character::complete::{ char, anychar, digit1, },
};


const COLON: char = ':';
const OPEN: &'static str = ">";
const CLOSE: &'static str = "<";
const UNIT_ID: &'static str = "unitId=";
const COURSE_LABEL: &'static str = "강의 ID";
const COURSE_ID: &'static str = "courseId=";
const PAIR: usize = 2;


type FResult<'s, O = &'s str> = IResult<&'s str, O>;




/// `dd:dd` with ASCII digits only.
pub fn time_token(s: &str) -> FResult {
    recognize(separated_pair(digit_pair, char(COLON), digit_pair))(s)
}
/// A time token together with its two numeric halves.
pub fn time_value(s: &str) -> FResult<(&str, (u32, u32))> {
    consumed(separated_pair(number_pair, char(COLON), number_pair))(s)
}
/// A time token that is the only text between `>` and `<`.
pub fn timecode_cell(s: &str) -> FResult<(&str, (u32, u32))> {
    delimited(pair(tag(OPEN), blank), time_value, pair(blank, tag(CLOSE)))(s)
}
/// The digits after `unitId=`, kept as text so no length is too long.
pub fn unit_id(s: &str) -> FResult {
    preceded(tag(UNIT_ID), digit1)(s)
}
/// `강의 ID` label, optional whitespace, digits.
pub fn labelled_course_id(s: &str) -> FResult {
    preceded(pair(tag(COURSE_LABEL), blank), digit1)(s)
}
pub fn course_id_param(s: &str) -> FResult {
    preceded(tag(COURSE_ID), digit1)(s)
}


pub fn time_tokens(s: &str) -> Vec<&str> {
    scan(s, time_token)
}
pub fn timecode_cells(s: &str) -> Vec<(&str, (u32, u32))> {
    scan(s, timecode_cell)
}
pub fn unit_ids(s: &str) -> Vec<&str> {
    scan(s, unit_id)
}
/// The labelled course id wins over the first `courseId=` parameter.
pub fn course_id(s: &str) -> Option<&str> {
    first(s, labelled_course_id).or_else( || first(s, course_id_param) )
}




fn digit_pair(s: &str) -> FResult {
    take_while_m_n(PAIR, PAIR, |c: char| c.is_ascii_digit())(s)
}
fn number_pair(s: &str) -> FResult<u32> {
    map_res(digit_pair, str::parse)(s)
}
fn blank(s: &str) -> FResult {
    take_while(char::is_whitespace)(s)
}
fn skip<'s, O>(s: &'s str) -> FResult<'s, Option<O>> {
    map(anychar, |_| None)(s)
}
fn token_or_skip<'s, O>(
    token: impl Fn(&'s str) -> FResult<'s, O>
    ) -> impl Fn(&'s str) -> FResult<'s, Option<O>> {
    move |s| alt((map(&token, Some), skip))(s)
}


/// Leftmost-first, non-overlapping walk: a matched token is consumed whole,
/// anything else advances one char. Stops only at end of input.
fn scan<'s, O>(s: &'s str, token: impl Fn(&'s str) -> FResult<'s, O>) -> Vec<O> {
    let mut it = iterator(s, token_or_skip(token));
    let found = (&mut it).flatten().collect();
    found
}
fn first<'s, O>(s: &'s str, token: impl Fn(&'s str) -> FResult<'s, O>) -> Option<O> {
    let mut it = iterator(s, token_or_skip(token));
    let found = (&mut it).flatten().next();
    found
}
