use glium::{backend::Facade, program, program::ProgramChooserCreationError, Program};

use crate::error::Error;

fn named(name: &'static str) -> impl FnOnce(ProgramChooserCreationError) -> Error {
    move |source| Error::Shader { name, source }
}

/// Two textures blended 80/20, no lighting.
pub fn textured<F: Facade + ?Sized>(facade: &F) -> Result<Program, Error> {
    program! (facade,
        330 => { vertex: "
                    #version 330 core

                    uniform mat4 model;
                    uniform mat4 view;
                    uniform mat4 projection;

                    in vec3 position;
                    in vec3 color;
                    in vec2 tex_coords;

                    out vec2 v_tex_coords;

                    void main() {
                        v_tex_coords = tex_coords;
                        gl_Position = projection * view * model * vec4(position, 1.0);
                    }
                ",

        fragment: "
                    #version 330 core

                    in vec2 v_tex_coords;
                    out vec4 f_color;

                    uniform sampler2D texture1;
                    uniform sampler2D texture2;

                    void main() {
                        f_color = mix(texture(texture1, v_tex_coords), texture(texture2, v_tex_coords), 0.2);
                    }
                ",
    })
    .map_err(named("textured"))
}

/// Phong shading from a diffuse/specular material under one directional,
/// four point and one spot light.
pub fn lit<F: Facade + ?Sized>(facade: &F) -> Result<Program, Error> {
    program! (facade,
        330 => { vertex: "
                    #version 330 core

                    uniform mat4 model;
                    uniform mat4 view;
                    uniform mat4 projection;

                    in vec3 position;
                    in vec3 normal;
                    in vec2 tex_coords;

                    out vec3 v_position;
                    out vec3 v_normal;
                    out vec2 v_tex_coords;

                    void main() {
                        v_position = vec3(model * vec4(position, 1.0));
                        v_normal = mat3(transpose(inverse(model))) * normal;
                        v_tex_coords = tex_coords;
                        gl_Position = projection * view * vec4(v_position, 1.0);
                    }
                ",

        fragment: "
                    #version 330 core
                    #define NR_POINT_LIGHTS 4

                    struct Material {
                        sampler2D diffuse;
                        sampler2D specular;
                        float shininess;
                    };

                    struct DirLight {
                        vec3 direction;
                        vec3 ambient;
                        vec3 diffuse;
                        vec3 specular;
                    };

                    struct PointLight {
                        vec3 position;
                        float constant;
                        float linear;
                        float quadratic;
                        vec3 ambient;
                        vec3 diffuse;
                        vec3 specular;
                    };

                    struct SpotLight {
                        vec3 position;
                        vec3 direction;
                        float cutOff;
                        float outerCutOff;
                        float constant;
                        float linear;
                        float quadratic;
                        vec3 ambient;
                        vec3 diffuse;
                        vec3 specular;
                    };

                    in vec3 v_position;
                    in vec3 v_normal;
                    in vec2 v_tex_coords;
                    out vec4 f_color;

                    uniform vec3 viewPos;
                    uniform Material material;
                    uniform DirLight dirLight;
                    uniform PointLight pointLights[NR_POINT_LIGHTS];
                    uniform SpotLight spotLight;

                    vec3 shade(vec3 ambient, vec3 diffuse, vec3 specular, vec3 light_dir, vec3 normal, vec3 view_dir) {
                        float diff = max(dot(normal, light_dir), 0.0);
                        vec3 reflect_dir = reflect(-light_dir, normal);
                        float spec = pow(max(dot(view_dir, reflect_dir), 0.0), material.shininess);
                        vec3 texel = vec3(texture(material.diffuse, v_tex_coords));
                        return ambient * texel
                            + diffuse * diff * texel
                            + specular * spec * vec3(texture(material.specular, v_tex_coords));
                    }

                    float attenuation(float constant, float linear, float quadratic, vec3 light_pos) {
                        float d = length(light_pos - v_position);
                        return 1.0 / (constant + linear * d + quadratic * (d * d));
                    }

                    void main() {
                        vec3 normal = normalize(v_normal);
                        vec3 view_dir = normalize(viewPos - v_position);

                        vec3 result = shade(dirLight.ambient, dirLight.diffuse, dirLight.specular,
                                            normalize(-dirLight.direction), normal, view_dir);

                        for (int i = 0; i < NR_POINT_LIGHTS; i++) {
                            PointLight p = pointLights[i];
                            vec3 light_dir = normalize(p.position - v_position);
                            float a = attenuation(p.constant, p.linear, p.quadratic, p.position);
                            result += a * shade(p.ambient, p.diffuse, p.specular, light_dir, normal, view_dir);
                        }

                        vec3 light_dir = normalize(spotLight.position - v_position);
                        float theta = dot(light_dir, normalize(-spotLight.direction));
                        float epsilon = spotLight.cutOff - spotLight.outerCutOff;
                        float intensity = clamp((theta - spotLight.outerCutOff) / epsilon, 0.0, 1.0);
                        float a = attenuation(spotLight.constant, spotLight.linear, spotLight.quadratic, spotLight.position);
                        result += a * intensity * shade(spotLight.ambient, spotLight.diffuse, spotLight.specular,
                                                        light_dir, normal, view_dir);

                        f_color = vec4(result, 1.0);
                    }
                ",
    })
    .map_err(named("lit"))
}

/// Flat white, for the lamps themselves.
pub fn lamp<F: Facade + ?Sized>(facade: &F) -> Result<Program, Error> {
    program! (facade,
        330 => { vertex: "
                    #version 330 core

                    uniform mat4 model;
                    uniform mat4 view;
                    uniform mat4 projection;

                    in vec3 position;

                    void main() {
                        gl_Position = projection * view * model * vec4(position, 1.0);
                    }
                ",

        fragment: "
                    #version 330 core

                    out vec4 f_color;

                    void main() {
                        f_color = vec4(1.0);
                    }
                ",
    })
    .map_err(named("lamp"))
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn compile_failures_carry_the_program_name() {
        let err = named("lamp")(ProgramChooserCreationError::NoVersion);
        assert_eq!(err.to_string(), "failed to compile lamp shader program");
        assert!(matches!(
            err.source().and_then(|source| source.downcast_ref::<ProgramChooserCreationError>()),
            Some(ProgramChooserCreationError::NoVersion)
        ));
    }
}
