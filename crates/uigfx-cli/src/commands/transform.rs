//! Transform command: builds a 4x4 matrix from operators and maps geometry.

use crate::TransformArgs;
use anyhow::{bail, Context, Result};
use tracing::debug;
use uigfx_core::{Offset, Rect};
use uigfx_math::Matrix;

/// One transform operator, applied in command line order.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Op {
    Translate(f32, f32, f32),
    Translate2d(f32, f32),
    Scale(f32, f32, f32),
    ScaleUniform(f32),
    RotateX(f32),
    RotateY(f32),
    RotateZ(f32),
}

impl Op {
    fn parse(text: &str) -> Result<Self> {
        let (name, values) = text
            .split_once(':')
            .with_context(|| format!("Operator must be name:values, got '{}'", text))?;
        let v = super::parse_floats(values)?;

        let op = match (name.trim().to_lowercase().as_str(), v.as_slice()) {
            ("translate", [x, y]) => Op::Translate2d(*x, *y),
            ("translate", [x, y, z]) => Op::Translate(*x, *y, *z),
            ("scale", [s]) => Op::ScaleUniform(*s),
            ("scale", [x, y]) => Op::Scale(*x, *y, 1.0),
            ("scale", [x, y, z]) => Op::Scale(*x, *y, *z),
            ("rotate-x", [d]) => Op::RotateX(*d),
            ("rotate-y", [d]) => Op::RotateY(*d),
            ("rotate-z" | "rotate", [d]) => Op::RotateZ(*d),
            _ => bail!("Unknown operator or wrong arity: {}", text),
        };
        Ok(op)
    }

    fn apply(self, m: &mut Matrix) {
        match self {
            Op::Translate(x, y, z) => m.translate(x, y, z),
            Op::Translate2d(x, y) => m.translate_2d(x, y),
            Op::Scale(x, y, z) => m.scale(x, y, z),
            Op::ScaleUniform(s) => m.scale_uniform(s),
            Op::RotateX(d) => m.rotate_x(d),
            Op::RotateY(d) => m.rotate_y(d),
            Op::RotateZ(d) => m.rotate_z(d),
        }
    }
}

fn parse_point(text: &str) -> Result<Offset> {
    match super::parse_floats(text)?.as_slice() {
        [x, y] => Ok(Offset::new(*x, *y)),
        _ => bail!("Point must be x,y: {}", text),
    }
}

fn parse_rect(text: &str) -> Result<Rect> {
    match super::parse_floats(text)?.as_slice() {
        [l, t, r, b] => Ok(Rect::new(*l, *t, *r, *b)),
        _ => bail!("Rect must be left,top,right,bottom: {}", text),
    }
}

fn build(ops: &[Op], invert: bool) -> Matrix {
    let mut m = Matrix::new();
    for op in ops {
        op.apply(&mut m);
    }
    if invert {
        m.invert();
    }
    m
}

pub fn run(args: TransformArgs, verbose: u8) -> Result<()> {
    let ops = args
        .ops
        .iter()
        .map(|s| Op::parse(s))
        .collect::<Result<Vec<_>>>()?;
    let points = args
        .points
        .iter()
        .map(|s| parse_point(s))
        .collect::<Result<Vec<_>>>()?;
    let rects = args
        .rects
        .iter()
        .map(|s| parse_rect(s))
        .collect::<Result<Vec<_>>>()?;

    debug!(ops = ops.len(), invert = args.invert, "transform");
    let m = build(&ops, args.invert);

    if verbose > 0 {
        for op in &ops {
            println!("{:?}", op);
        }
    }
    println!("{}", m);

    for p in points {
        println!("{} -> {}", p, m.map(p));
    }
    for r in rects {
        println!("{} -> {}", r, m.map_rect(r));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ops() {
        assert_eq!(Op::parse("translate:1,2").unwrap(), Op::Translate2d(1.0, 2.0));
        assert_eq!(Op::parse("translate:1,2,3").unwrap(), Op::Translate(1.0, 2.0, 3.0));
        assert_eq!(Op::parse("scale:2").unwrap(), Op::ScaleUniform(2.0));
        assert_eq!(Op::parse("Rotate-Z:-90").unwrap(), Op::RotateZ(-90.0));
        assert!(Op::parse("skew:1").is_err());
        assert!(Op::parse("translate").is_err());
        assert!(Op::parse("rotate-x:1,2").is_err());
    }

    #[test]
    fn test_build_rotate_then_scale() {
        let ops = [Op::RotateZ(90.0), Op::ScaleUniform(2.0)];
        let m = build(&ops, false);
        let r = m.map_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!((r.left + 20.0).abs() < 1e-3);
        assert!(r.top.abs() < 1e-3);
        assert!(r.right.abs() < 1e-3);
        assert!((r.bottom - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_build_inverted() {
        let ops = [Op::Translate2d(5.0, -3.0)];
        let m = build(&ops, true);
        let p = m.map(Offset::new(5.0, -3.0));
        assert!(p.x.abs() < 1e-5 && p.y.abs() < 1e-5);
    }

    #[test]
    fn test_parse_geometry() {
        assert_eq!(parse_point("1.5,-2").unwrap(), Offset::new(1.5, -2.0));
        assert_eq!(parse_rect("0,0,10,20").unwrap(), Rect::new(0.0, 0.0, 10.0, 20.0));
        assert!(parse_point("1").is_err());
        assert!(parse_rect("1,2,3").is_err());
    }
}
