//! 배관 재질(거칠기/허용 호칭경)과 유체(점도/밀도) 참고 테이블.
//! 값은 차트용 근사치이며 설계 검증용 데이터가 아니다.

#[derive(Debug, PartialEq)]
pub struct PipeMaterial {
    pub name: &'static str,
    /// 절대 거칠기 [m]
    pub roughness_m: f64,
    /// 허용 호칭경 [inch], 오름차순
    pub diameters_in: &'static [f64],
}

impl PipeMaterial {
    /// 재질 변경 시 선택되는 기본 호칭경.
    pub fn first_diameter_in(&self) -> f64 {
        self.diameters_in[0]
    }

    /// 허용 오차 안에 드는 테이블 값을 돌려준다.
    pub fn matching_diameter(&self, diameter_in: f64) -> Option<f64> {
        self.diameters_in
            .iter()
            .copied()
            .find(|d| (d - diameter_in).abs() < 1e-9)
    }

    pub fn offers_diameter(&self, diameter_in: f64) -> bool {
        self.matching_diameter(diameter_in).is_some()
    }
}

#[derive(Debug, PartialEq)]
pub struct Fluid {
    pub name: &'static str,
    /// 점도 [Pa·s]
    pub viscosity_pa_s: f64,
    /// 밀도 [kg/m3]
    pub density_kg_per_m3: f64,
}

/// 재질 이름을 찾지 못했을 때 사용하는 거칠기 [m].
pub const FALLBACK_ROUGHNESS_M: f64 = 0.0001;

/// UI에서 고를 수 있는 배관 길이 [m].
pub const PIPE_LENGTH_CHOICES_M: [f64; 11] = [
    1.0, 100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0, 1000.0,
];

pub fn materials() -> &'static [PipeMaterial] {
    MATERIALS
}

pub fn fluids() -> &'static [Fluid] {
    FLUIDS
}

pub fn default_material() -> &'static PipeMaterial {
    &MATERIALS[0]
}

pub fn default_fluid() -> &'static Fluid {
    &FLUIDS[0]
}

pub fn find_material(name: &str) -> Option<&'static PipeMaterial> {
    let name = name.trim();
    MATERIALS.iter().find(|m| m.name.eq_ignore_ascii_case(name))
}

pub fn find_fluid(name: &str) -> Option<&'static Fluid> {
    let name = name.trim();
    FLUIDS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

static MATERIALS: &[PipeMaterial] = &[
    PipeMaterial {
        name: "Steel - Commercial",
        roughness_m: 0.00045,
        diameters_in: &[0.5, 1.0, 1.5, 2.0, 3.0, 4.0],
    },
    PipeMaterial {
        name: "PVC - Smooth",
        roughness_m: 0.000005,
        diameters_in: &[0.5, 1.0, 1.5, 2.0, 3.0, 4.0],
    },
    PipeMaterial {
        name: "Cast Iron",
        roughness_m: 0.00026,
        diameters_in: &[2.0, 4.0, 6.0, 8.0, 10.0],
    },
    PipeMaterial {
        name: "Concrete",
        roughness_m: 0.003,
        diameters_in: &[12.0, 18.0, 24.0, 30.0, 36.0],
    },
    PipeMaterial {
        name: "Copper - Drawn",
        roughness_m: 0.0000015,
        diameters_in: &[0.25, 0.5, 0.75, 1.0, 1.25, 1.5],
    },
];

static FLUIDS: &[Fluid] = &[
    Fluid {
        name: "Water",
        viscosity_pa_s: 0.001,
        density_kg_per_m3: 998.0,
    },
    Fluid {
        name: "Crude Oil",
        viscosity_pa_s: 0.1,
        density_kg_per_m3: 870.0,
    },
    Fluid {
        name: "Light Diesel",
        viscosity_pa_s: 0.004,
        density_kg_per_m3: 830.0,
    },
    Fluid {
        name: "Pulp Slurry",
        viscosity_pa_s: 0.015,
        density_kg_per_m3: 1025.0,
    },
    Fluid {
        name: "Black Liquor",
        viscosity_pa_s: 0.03,
        density_kg_per_m3: 1100.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let steel = find_material("steel - commercial").expect("steel");
        assert_eq!(steel.roughness_m, 0.00045);
        assert_eq!(find_fluid("  WATER ").map(|f| f.density_kg_per_m3), Some(998.0));
        assert!(find_material("Unobtainium").is_none());
    }

    #[test]
    fn every_material_has_sorted_diameters() {
        for m in materials() {
            assert!(!m.diameters_in.is_empty(), "{} has no diameters", m.name);
            assert!(m.diameters_in.windows(2).all(|w| w[0] < w[1]), "{}", m.name);
        }
    }

    #[test]
    fn defaults_are_first_entries() {
        assert_eq!(default_material().name, "Steel - Commercial");
        assert_eq!(default_material().first_diameter_in(), 0.5);
        assert_eq!(default_fluid().name, "Water");
        assert!(find_material("Cast Iron").unwrap().offers_diameter(6.0));
        assert!(!find_material("Cast Iron").unwrap().offers_diameter(0.5));
    }

    #[test]
    fn near_diameter_snaps_to_table_value() {
        let steel = default_material();
        assert_eq!(steel.matching_diameter(0.5000000001), Some(0.5));
        assert_eq!(steel.matching_diameter(0.51), None);
    }
}
