//! 여러 화면이 공유하는 배관/유동 선택 상태.
//!
//! 모든 변경은 `&mut self`를 거치므로 쓰는 쪽은 항상 하나이며, 변경 직후
//! 계산 엔진을 다시 호출해 결과를 갱신하고 구독자에게 알린다.

use crate::config::SessionDefaults;
use crate::hydraulics::{FlowRate, FlowResult, DEFAULT_STEPS};
use crate::material_db::{self, Fluid, PipeMaterial};

/// 세션 변경 요청이 거부된 이유.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("unknown pipe material: {0}")]
    UnknownMaterial(String),
    #[error("unknown fluid: {0}")]
    UnknownFluid(String),
    #[error("{material} is not offered in {diameter_in} in")]
    DiameterNotOffered {
        material: &'static str,
        diameter_in: f64,
    },
}

/// 사용자가 고른 현재 입력값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowInputs {
    pub material: &'static PipeMaterial,
    /// 호칭경 [inch]. 항상 `material`이 허용하는 값 중 하나.
    pub diameter_in: f64,
    pub pipe_length_m: f64,
    pub fluid: &'static Fluid,
    /// 유속 [m/s]. 0 이하는 "미입력"으로 취급된다.
    pub velocity_mps: f64,
}

impl Default for FlowInputs {
    fn default() -> Self {
        let material = material_db::default_material();
        Self {
            material,
            diameter_in: material.first_diameter_in(),
            pipe_length_m: 100.0,
            fluid: material_db::default_fluid(),
            velocity_mps: 100.0,
        }
    }
}

impl FlowInputs {
    /// 설정 파일의 기본값으로 입력을 만든다. 잘못된 항목은 테이블 기본값으로 대체한다.
    pub fn from_defaults(defaults: &SessionDefaults) -> Self {
        let fallback = Self::default();
        let material = material_db::find_material(&defaults.material).unwrap_or_else(|| {
            tracing::warn!(material = %defaults.material, "unknown material in config, using default");
            fallback.material
        });
        let diameter_in = material
            .matching_diameter(defaults.diameter_in)
            .unwrap_or_else(|| {
                tracing::warn!(
                    material = material.name,
                    diameter_in = defaults.diameter_in,
                    "diameter not offered for material, using first diameter"
                );
                material.first_diameter_in()
            });
        let fluid = material_db::find_fluid(&defaults.fluid).unwrap_or_else(|| {
            tracing::warn!(fluid = %defaults.fluid, "unknown fluid in config, using default");
            fallback.fluid
        });
        Self {
            material,
            diameter_in,
            pipe_length_m: defaults.pipe_length_m,
            fluid,
            velocity_mps: defaults.velocity_mps,
        }
    }
}

/// [`FlowSession::subscribe`]가 돌려주는 구독 식별자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&FlowInputs, &FlowResult)>;

/// 입력 상태와 마지막 계산 결과를 함께 보관한다.
pub struct FlowSession {
    inputs: FlowInputs,
    steps: usize,
    result: FlowResult,
    revision: u64,
    next_subscription: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl std::fmt::Debug for FlowSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowSession")
            .field("inputs", &self.inputs)
            .field("steps", &self.steps)
            .field("result", &self.result)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for FlowSession {
    fn default() -> Self {
        Self::new(FlowInputs::default(), DEFAULT_STEPS)
    }
}

impl FlowSession {
    pub fn new(inputs: FlowInputs, steps: usize) -> Self {
        let result = compute(&inputs, steps);
        Self {
            inputs,
            steps,
            result,
            revision: 0,
            next_subscription: 0,
            listeners: Vec::new(),
        }
    }

    pub fn inputs(&self) -> &FlowInputs {
        &self.inputs
    }

    pub fn result(&self) -> &FlowResult {
        &self.result
    }

    pub fn flow_rate(&self) -> FlowRate {
        self.result.flow_rate
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// 성공한 변경마다 1씩 증가한다. 화면 갱신 여부 판단용.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// 재질을 바꾸고 호칭경을 그 재질의 첫 번째 값으로 되돌린다.
    pub fn select_material(&mut self, name: &str) -> Result<(), SessionError> {
        let material = material_db::find_material(name)
            .ok_or_else(|| SessionError::UnknownMaterial(name.to_string()))?;
        self.inputs.material = material;
        self.inputs.diameter_in = material.first_diameter_in();
        self.recompute();
        Ok(())
    }

    pub fn select_diameter(&mut self, diameter_in: f64) -> Result<(), SessionError> {
        let material = self.inputs.material;
        let diameter_in = material.matching_diameter(diameter_in).ok_or(
            SessionError::DiameterNotOffered {
                material: material.name,
                diameter_in,
            },
        )?;
        self.inputs.diameter_in = diameter_in;
        self.recompute();
        Ok(())
    }

    pub fn select_fluid(&mut self, name: &str) -> Result<(), SessionError> {
        let fluid = material_db::find_fluid(name)
            .ok_or_else(|| SessionError::UnknownFluid(name.to_string()))?;
        self.inputs.fluid = fluid;
        self.recompute();
        Ok(())
    }

    pub fn set_pipe_length(&mut self, pipe_length_m: f64) {
        self.inputs.pipe_length_m = pipe_length_m;
        self.recompute();
    }

    pub fn set_velocity(&mut self, velocity_mps: f64) {
        self.inputs.velocity_mps = velocity_mps;
        self.recompute();
    }

    pub fn set_steps(&mut self, steps: usize) {
        self.steps = steps;
        self.recompute();
    }

    /// 재계산될 때마다 호출될 콜백을 등록한다.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&FlowInputs, &FlowResult) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// 등록되어 있던 구독이면 `true`.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn recompute(&mut self) {
        self.result = compute(&self.inputs, self.steps);
        self.revision += 1;
        tracing::debug!(
            revision = self.revision,
            material = self.inputs.material.name,
            diameter_in = self.inputs.diameter_in,
            fluid = self.inputs.fluid.name,
            velocity_mps = self.inputs.velocity_mps,
            flow_rate_m3_per_s = self.result.flow_rate.exact_m3_per_s,
            reynolds = ?self.result.reynolds,
            regime = %self.result.regime,
            "flow session recomputed"
        );
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.inputs, &self.result);
        }
    }
}

fn compute(inputs: &FlowInputs, steps: usize) -> FlowResult {
    FlowResult::compute(
        Some(inputs.material),
        Some(inputs.fluid),
        inputs.diameter_in,
        inputs.pipe_length_m,
        inputs.velocity_mps,
        steps,
    )
}
