//! Reference fixtures for fixed-point natural cubic spline evaluators.
//!
//! Knots are drawn from a seed, a natural cubic spline is fitted through
//! them, and every coefficient, bound and reference answer is converted to
//! WAD fixed point (10^18) exactly before being written as a CSV table or an
//! ABI-encoded test vector.

pub mod configuration;
pub mod configurationerror;

pub mod encoding {
    pub mod encodingerror;
    pub mod abiencoder;
    pub mod csvtable;
}

pub mod fixture {
    pub mod fixtureerror;
    pub mod knotgenerator;
    pub mod testcase;
    pub mod segmenttable;
    pub mod fixturegenerator;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod splineerror;
        pub mod nonparametriccurve {
            pub mod nonparametriccurve;
            pub mod segmentlocator;
            pub mod naturalcubicspline;
        }
    }
    pub mod fixedpoint {
        pub mod fixedpoint;
        pub mod fixedpointerror;
    }
}
